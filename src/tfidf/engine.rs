use super::tokenizer::tokenize;
use indexmap::IndexSet;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// The submitted document set was empty. Empty *strings* are fine;
    /// an empty *set* is not.
    #[error("at least one document is required")]
    EmptyCorpus,
}

/// Result of vectorizing one document set.
///
/// `weights` is indexed `[term][doc]`: one row per vocabulary term, one
/// column per submitted document. Every cell is finite and non-negative, and
/// each non-zero document column has Euclidean norm 1.
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfModel {
    /// Distinct terms in first-occurrence order across the document set.
    pub vocabulary: Vec<String>,
    /// |vocabulary| x |documents| weight matrix.
    pub weights: Vec<Vec<f64>>,
    /// Number of documents the matrix covers. Kept explicitly so the
    /// transpose stays correct when the vocabulary is empty.
    pub document_count: usize,
}

impl TfIdfModel {
    /// Transposes the matrix into per-document rows (`[doc][term]`), the
    /// layout the HTTP response uses.
    pub fn document_rows(&self) -> Vec<Vec<f64>> {
        (0..self.document_count)
            .map(|d| self.weights.iter().map(|row| row[d]).collect())
            .collect()
    }
}

/// Computes the TF-IDF weight matrix for an ordered document set.
///
/// Pipeline:
/// 1. Tokenize every document independently.
/// 2. Collect the vocabulary in first-occurrence order (document index
///    ascending, then position within the document).
/// 3. `tf(t, d)` = count of `t` in `d` / total tokens in `d` (0 for an
///    empty document).
/// 4. `idf(t)` = `ln((1 + N) / (1 + df(t))) + 1` — the smoothed variant,
///    always finite and >= 1 even when a term appears in every document.
/// 5. L2-normalize each document column; all-zero columns stay zero.
///
/// The only failure is an empty document set. A document that tokenizes to
/// nothing simply produces an all-zero column.
pub fn compute_tf_idf(documents: &[String]) -> Result<TfIdfModel, AnalysisError> {
    if documents.is_empty() {
        return Err(AnalysisError::EmptyCorpus);
    }

    let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

    let mut vocabulary: IndexSet<String> = IndexSet::new();
    for tokens in &tokenized {
        for token in tokens {
            vocabulary.insert(token.clone());
        }
    }

    // Per-document term counts, then document frequency per term.
    let counts: Vec<HashMap<&str, usize>> = tokenized
        .iter()
        .map(|tokens| {
            let mut map: HashMap<&str, usize> = HashMap::new();
            for token in tokens {
                *map.entry(token.as_str()).or_insert(0) += 1;
            }
            map
        })
        .collect();

    let doc_count = documents.len() as f64;
    let idf: Vec<f64> = vocabulary
        .iter()
        .map(|term| {
            let df = counts.iter().filter(|c| c.contains_key(term.as_str())).count() as f64;
            ((1.0 + doc_count) / (1.0 + df)).ln() + 1.0
        })
        .collect();

    let mut weights: Vec<Vec<f64>> = vocabulary
        .iter()
        .enumerate()
        .map(|(t, term)| {
            tokenized
                .iter()
                .zip(&counts)
                .map(|(tokens, count)| {
                    if tokens.is_empty() {
                        return 0.0;
                    }
                    let tf = *count.get(term.as_str()).unwrap_or(&0) as f64
                        / tokens.len() as f64;
                    tf * idf[t]
                })
                .collect()
        })
        .collect();

    // Column-wise L2 normalization; zero columns are left untouched.
    for d in 0..documents.len() {
        let norm = weights.iter().map(|row| row[d] * row[d]).sum::<f64>().sqrt();
        if norm > 0.0 {
            for row in weights.iter_mut() {
                row[d] /= norm;
            }
        }
    }

    Ok(TfIdfModel {
        vocabulary: vocabulary.into_iter().collect(),
        weights,
        document_count: documents.len(),
    })
}
