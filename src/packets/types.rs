use serde::{Deserialize, Serialize};

/// One guided question with its canonical reference answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionEntry {
    pub question: String,
    /// The stored answer user responses are scored against. Never sent to
    /// clients through the listing endpoint.
    pub answer: String,
}

/// One packet in the `/packets` listing: its name and question texts only.
#[derive(Debug, Serialize, Deserialize)]
pub struct PacketSummary {
    pub name: String,
    pub questions: Vec<String>,
}

/// Response body for `GET /packets`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PacketListResponse {
    pub packets: Vec<PacketSummary>,
}
