use super::engine::score_answer;
use super::types::{ScoreRequest, ScoreResponse};
use crate::error::{ApiError, ApiJson};
use crate::packets::catalog::PacketCatalog;
use axum::{Extension, Json};
use std::sync::Arc;

/// `POST /problem-canvas` — resolves `(packet_name, question_index)` through
/// the catalog and scores the response against the stored answer.
///
/// Unknown packet names and out-of-range indices are NotFound, distinct from
/// InvalidInput, so the client can tell a bad reference from a bad request
/// shape. A body that fails to deserialize (e.g. a missing field) is
/// InvalidInput via `ApiJson`. The scorer itself never sees packet
/// identifiers, only the two resolved strings.
pub async fn handle_score(
    Extension(catalog): Extension<Arc<PacketCatalog>>,
    ApiJson(req): ApiJson<ScoreRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let entry = catalog
        .resolve(&req.packet_name, req.question_index)
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "no question at index {} in packet '{}'",
                req.question_index, req.packet_name
            ))
        })?;

    let score = score_answer(&entry.answer, &req.response);
    tracing::debug!(
        "scored response for packet '{}' question {}: {:.3}",
        req.packet_name,
        req.question_index,
        score
    );

    Ok(Json(ScoreResponse {
        question: entry.question.clone(),
        stored_answer: entry.answer.clone(),
        user_response: req.response,
        score,
    }))
}
