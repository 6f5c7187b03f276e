use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::routes::PackRequest;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/packs", get(list_packs))
        .route("/get_pack", post(get_pack))
}

async fn list_packs(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let packs = state.store.catalog()?;
    Ok(Json(json!({ "available_packs": packs })))
}

async fn get_pack(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PackRequest>,
) -> Result<Json<Value>, ApiError> {
    let name = req.pack.to_lowercase();
    let pack = state.store.load(&name)?;
    let content = pack.filtered_json(req.sections.as_deref());
    Ok(Json(json!({
        "pack": name,
        "content": content,
        "meta": {
            "format": req.format.as_deref().unwrap_or("json"),
            "options": req.options.unwrap_or_else(|| json!({})),
        },
    })))
}
