use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::routes::PackRequest;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/render_payload", post(render_payload))
}

/// One self-contained payload a frontend can turn into posters or
/// flashcards: content plus styling metadata, nothing resolved
/// against server state afterwards.
///
/// Unlike `/get_pack`, the pack name is echoed in the caller's
/// spelling; only the theme lookup lowercases it.
async fn render_payload(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PackRequest>,
) -> Result<Json<Value>, ApiError> {
    let pack = state.store.load(&req.pack)?;
    let sections = pack.filtered_json(req.sections.as_deref());
    Ok(Json(json!({
        "pack": req.pack,
        "style": pack_core::style::style_block(&req.pack),
        "sections": sections,
        "options": req.options.unwrap_or_else(|| json!({})),
    })))
}
