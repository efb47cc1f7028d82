use super::engine::compute_tf_idf;
use super::types::TfIdfResponse;
use crate::error::ApiError;
use axum::Json;
use axum::extract::Multipart;

/// `POST /tfidf` — multipart form with two kinds of fields:
///
/// - `texts`: a JSON-encoded array of document strings (one per text box);
/// - `files`: zero or more uploaded text files, decoded as UTF-8.
///
/// The final document order is all `texts` entries in form order followed by
/// the file contents in upload order. Empty strings are valid documents and
/// produce all-zero weight rows; an entirely empty submission is rejected.
pub async fn handle_tfidf(mut multipart: Multipart) -> Result<Json<TfIdfResponse>, ApiError> {
    let mut texts: Vec<String> = Vec::new();
    let mut file_docs: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidInput(format!("malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "texts" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| ApiError::InvalidInput(format!("unreadable texts field: {}", e)))?;
                texts = serde_json::from_str(&raw).map_err(|e| {
                    ApiError::InvalidInput(format!("texts must be a JSON array of strings: {}", e))
                })?;
            }
            "files" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::InvalidInput(format!("unreadable file upload: {}", e)))?;
                file_docs.push(String::from_utf8_lossy(&bytes).into_owned());
            }
            other => {
                tracing::debug!("ignoring unknown multipart field '{}'", other);
            }
        }
    }

    let mut documents = texts;
    documents.append(&mut file_docs);

    if documents.is_empty() {
        return Err(ApiError::InvalidInput(
            "at least one document is required".to_string(),
        ));
    }

    tracing::debug!("computing tf-idf over {} documents", documents.len());
    let model = compute_tf_idf(&documents)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    let tfidf_scores = model.document_rows();
    Ok(Json(TfIdfResponse {
        feature_names: model.vocabulary,
        tfidf_scores,
    }))
}
