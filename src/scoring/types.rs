use serde::{Deserialize, Serialize};

/// Request body for `/problem-canvas`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreRequest {
    /// Name of the question packet (e.g. "bullying").
    pub packet_name: String,
    /// Zero-based index into the packet's question list.
    pub question_index: usize,
    /// The user's free-text answer.
    pub response: String,
}

/// Response body for `/problem-canvas`.
///
/// Constructed fresh per request and never cached.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    /// The resolved question text.
    pub question: String,
    /// The canonical reference answer the response was compared against.
    pub stored_answer: String,
    /// The user's response, echoed back verbatim.
    pub user_response: String,
    /// Similarity score in [0, 1].
    pub score: f64,
}
