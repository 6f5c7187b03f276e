use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::error::ApiError;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/preview/{pack_name}", get(preview))
}

#[derive(Template)]
#[template(path = "preview.html")]
struct PreviewTemplate {
    title: String,
    sections: Vec<(String, String)>,
}

/// Uppercase the first letter of each space-separated word.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Minimal HTML rendering of a pack, one heading and paragraph per
/// section. Section keys and text are escaped by the template engine.
async fn preview(
    State(state): State<Arc<AppState>>,
    Path(pack_name): Path<String>,
) -> Result<Html<String>, ApiError> {
    let pack = state.store.load(&pack_name)?;
    let sections = pack
        .sections()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let html = PreviewTemplate {
        title: title_case(&pack_name),
        sections,
    }
    .render()
    .unwrap_or_default();
    Ok(Html(html))
}
