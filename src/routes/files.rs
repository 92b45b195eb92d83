//! Flattened file map endpoint.
//!
//! GET /files?path=<optional subtree>
//!
//! Runs one full traversal per request (nothing is cached between calls)
//! and answers `{ "count": N, "files": { path: entry, ... } }`. A walk that
//! loses individual subdirectories still answers 200 with what was
//! reachable; only a failed listing of the requested root becomes an error
//! response.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::Result;
use crate::github::SharedMapper;
use crate::models::FileMapResponse;

pub fn routes(mapper: SharedMapper) -> Router {
    Router::new()
        .route("/files", get(get_files))
        .with_state(mapper)
}

#[derive(Debug, Deserialize)]
struct FilesQuery {
    path: Option<String>,
}

async fn get_files(
    State(mapper): State<SharedMapper>,
    Query(query): Query<FilesQuery>,
) -> Result<Json<FileMapResponse>> {
    let files = mapper.flatten(query.path.as_deref().unwrap_or("")).await?;
    Ok(Json(FileMapResponse {
        count: files.len(),
        files,
    }))
}
