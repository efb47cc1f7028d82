use super::types::QuestionEntry;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::path::Path;

/// Catalog document bundled into the binary, used when no `--packets` file
/// is given. Contains the five standard packets of the original system.
const BUNDLED_CATALOG: &str = include_str!("../../assets/packets.json");

/// The static packet catalog: packet name -> ordered question/answer pairs.
///
/// Built once at startup and never mutated afterwards; handlers share it
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct PacketCatalog {
    packets: IndexMap<String, Vec<QuestionEntry>>,
}

impl PacketCatalog {
    /// Parses a catalog from a JSON document mapping packet names to arrays
    /// of `{question, answer}` objects. Packet order follows the document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let packets: IndexMap<String, Vec<QuestionEntry>> =
            serde_json::from_str(json).context("catalog is not valid packet JSON")?;
        Ok(Self { packets })
    }

    /// Loads a catalog from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read packet catalog {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("failed to parse packet catalog {}", path.display()))
    }

    /// Returns the catalog bundled into the binary.
    pub fn bundled() -> Self {
        // The bundled document is part of the build; a parse failure here is
        // a build defect, caught by tests.
        Self::from_json_str(BUNDLED_CATALOG).expect("bundled packet catalog is invalid")
    }

    /// Resolves a packet name and question index to its entry. Returns `None`
    /// when the packet is unknown or the index is out of range.
    pub fn resolve(&self, packet_name: &str, question_index: usize) -> Option<&QuestionEntry> {
        self.packets.get(packet_name)?.get(question_index)
    }

    /// Iterates packets in catalog order as (name, entries).
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<QuestionEntry>)> {
        self.packets.iter()
    }

    pub fn packet_count(&self) -> usize {
        self.packets.len()
    }
}
