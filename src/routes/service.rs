use axum::{extract::State, routing::get, Json, Router};

use crate::models::ServiceInfo;

pub fn routes(info: ServiceInfo) -> Router {
    Router::new()
        .route("/", get(describe_service))
        .with_state(info)
}

async fn describe_service(State(info): State<ServiceInfo>) -> Json<ServiceInfo> {
    Json(info)
}
