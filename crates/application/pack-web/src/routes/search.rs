use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/search", post(search))
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchScope {
    pub pack: Option<String>,
}

async fn search(
    State(state): State<Arc<AppState>>,
    Query(scope): Query<SearchScope>,
    Json(req): Json<SearchRequest>,
) -> Json<Value> {
    let query = req.q.trim().to_lowercase();
    let results = pack_core::search(&state.store, &req.q, scope.pack.as_deref());
    Json(json!({ "query": query, "results": results }))
}
