use super::catalog::PacketCatalog;
use super::types::{PacketListResponse, PacketSummary};
use axum::{Extension, Json};
use std::sync::Arc;

/// `GET /packets` — lists packet names and question texts so a client can
/// render its selection UI without hardcoding the catalog. Stored answers
/// stay server-side.
pub async fn handle_list_packets(
    Extension(catalog): Extension<Arc<PacketCatalog>>,
) -> Json<PacketListResponse> {
    let packets = catalog
        .iter()
        .map(|(name, entries)| PacketSummary {
            name: name.clone(),
            questions: entries.iter().map(|e| e.question.clone()).collect(),
        })
        .collect();

    Json(PacketListResponse { packets })
}
