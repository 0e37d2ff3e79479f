//! Enrichment submission endpoint

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Acknowledgement that an enrichment job was accepted
#[derive(Debug, Clone, Serialize)]
pub struct EnrichmentAcceptedResponse {
    pub job_id: u64,
    pub song_id: u64,
    pub status: String,
}

/// POST /songs/{id}/enrich - queue a song for enrichment
///
/// Returns 202 immediately; the job runs in the background and merges
/// its result into the catalog when it finishes. There is no retry on
/// failure, callers re-submit if they still want the data.
pub async fn enrich_song(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<(StatusCode, Json<EnrichmentAcceptedResponse>), ApiError> {
    let song = state.song_service.get_required(id).await?;

    let job_id = state
        .enrichment_scheduler
        .submit(song.id, song.title, song.artist);

    info!(song_id = id, job_id = %job_id, "enrichment accepted");
    Ok((
        StatusCode::ACCEPTED,
        Json(EnrichmentAcceptedResponse {
            job_id: job_id.value(),
            song_id: id,
            status: "accepted".to_string(),
        }),
    ))
}
