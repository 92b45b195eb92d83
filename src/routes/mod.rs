//! API route handlers - maps HTTP endpoints onto the mapper.
//!
//! Each submodule defines the routes for one endpoint:
//! - `service`: service description (GET /)
//! - `files`: the flattened repository map (GET /files)
//! - `health`: liveness and uptime (GET /health)

pub mod files;
pub mod health;
pub mod service;

use axum::Router;

use crate::github::SharedMapper;
use crate::models::ServiceInfo;
use health::ServerStart;

pub fn create_router(mapper: SharedMapper, info: ServiceInfo, start: ServerStart) -> Router {
    Router::new()
        .merge(service::routes(info))
        .merge(files::routes(mapper))
        .merge(health::routes(start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{GitHubClient, RepoMapper};
    use crate::models::{ContentEntry, EntryKind};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Json;
    use serde_json::Value;
    use std::sync::Arc;

    async fn spawn(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn entry(path: &str, kind: EntryKind, size: u64) -> ContentEntry {
        ContentEntry {
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            path: path.to_string(),
            sha: format!("sha-{}", path),
            size,
            html_url: format!("https://github.com/octo/demo/blob/main/{}", path),
            download_url: match kind {
                EntryKind::File => Some(format!(
                    "https://raw.githubusercontent.com/octo/demo/main/{}",
                    path
                )),
                _ => None,
            },
            kind,
            encoding: None,
        }
    }

    async fn list_root() -> Json<Vec<ContentEntry>> {
        Json(vec![
            entry("a.txt", EntryKind::File, 10),
            entry("sub", EntryKind::Dir, 0),
        ])
    }

    async fn list_sub() -> Json<Vec<ContentEntry>> {
        Json(vec![entry("sub/b.txt", EntryKind::File, 5)])
    }

    /// A contents API double serving: root = a.txt + sub/, sub = sub/b.txt.
    async fn canned_upstream() -> String {
        let app = Router::new()
            .route("/repos/octo/demo/contents/", get(list_root))
            .route("/repos/octo/demo/contents/sub", get(list_sub));
        spawn(app).await
    }

    async fn serve_app(api_url: String) -> String {
        let client =
            GitHubClient::new(Some("test-token".to_string()), "octo", "demo", api_url).unwrap();
        let mapper = Arc::new(RepoMapper::new(client));
        let info = ServiceInfo::for_repository("octo", "demo");
        spawn(create_router(mapper, info, ServerStart::now())).await
    }

    #[tokio::test]
    async fn files_endpoint_returns_the_flattened_map() {
        let upstream = canned_upstream().await;
        let app = serve_app(upstream).await;

        let response = reqwest::get(format!("{}/files", app)).await.unwrap();
        assert_eq!(response.status().as_u16(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["count"], 2);
        assert_eq!(body["files"]["a.txt"]["size"], 10);
        assert_eq!(body["files"]["a.txt"]["type"], "file");
        assert_eq!(body["files"]["sub/b.txt"]["name"], "b.txt");
        assert!(body["files"].get("sub").is_none());
    }

    #[tokio::test]
    async fn files_endpoint_walks_a_requested_subtree() {
        let upstream = canned_upstream().await;
        let app = serve_app(upstream).await;

        let body: Value = reqwest::get(format!("{}/files?path=sub", app))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["count"], 1);
        assert!(body["files"].get("sub/b.txt").is_some());
        assert!(body["files"].get("a.txt").is_none());
    }

    #[tokio::test]
    async fn a_failed_root_listing_becomes_bad_gateway() {
        let upstream =
            spawn(Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR })).await;
        let app = serve_app(upstream).await;

        let response = reqwest::get(format!("{}/files", app)).await.unwrap();
        assert_eq!(response.status().as_u16(), 502);

        let body: Value = response.json().await.unwrap();
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("failed to list directory")
        );
    }

    #[tokio::test]
    async fn service_description_lists_the_endpoints() {
        let upstream = canned_upstream().await;
        let app = serve_app(upstream).await;

        let body: Value = reqwest::get(format!("{}/", app))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["service"], "repo-mapper");
        assert_eq!(body["repository"], "octo/demo");
        assert_eq!(body["endpoints"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let upstream = canned_upstream().await;
        let app = serve_app(upstream).await;

        let body: Value = reqwest::get(format!("{}/health", app))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        assert_eq!(body["status"], "ok");
        assert!(body["uptime_secs"].is_u64());
        assert!(body["started_at"].is_string());
    }
}
