use serde::{Deserialize, Serialize};

/// Response body for `/tfidf`.
///
/// `tfidf_scores` is row-major with one row per submitted document and one
/// column per term, matching `feature_names`. Note this is the transpose of
/// the engine's internal matrix; the handler performs the flip so the client
/// can render a document-per-column table directly.
#[derive(Debug, Serialize, Deserialize)]
pub struct TfIdfResponse {
    /// Vocabulary terms in first-occurrence order.
    pub feature_names: Vec<String>,
    /// One weight row per document, aligned with `feature_names`.
    pub tfidf_scores: Vec<Vec<f64>>,
}
