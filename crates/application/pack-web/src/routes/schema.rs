use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/schema", get(schema))
}

/// Editor metadata, served verbatim from `app_schema/config.json`.
///
/// A missing file answers 200 with an error-shaped body; editor
/// clients poll this endpoint and treat that body as "no config yet".
async fn schema(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    if !state.schema_path.exists() {
        return Ok(Json(json!({ "error": "config.json missing" })));
    }
    let raw = tokio::fs::read_to_string(&state.schema_path)
        .await
        .map_err(pack_core::Error::from)?;
    let value: Value = serde_json::from_str(&raw).map_err(pack_core::Error::from)?;
    Ok(Json(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::testing::state_with;
    use std::fs;

    #[tokio::test]
    async fn missing_config_answers_200_with_an_error_body() {
        let (_root, state) = state_with(&[]);
        let Json(body) = schema(State(state)).await.unwrap();
        assert_eq!(body, json!({ "error": "config.json missing" }));
    }

    #[tokio::test]
    async fn config_contents_are_served_verbatim() {
        let (root, state) = state_with(&[]);
        fs::create_dir_all(root.path().join("app_schema")).unwrap();
        fs::write(
            root.path().join("app_schema").join("config.json"),
            r#"{"packs": ["nlp", "sales"], "editor": "studio"}"#,
        )
        .unwrap();
        let Json(body) = schema(State(state)).await.unwrap();
        assert_eq!(body, json!({ "packs": ["nlp", "sales"], "editor": "studio" }));
    }

    #[tokio::test]
    async fn malformed_config_is_an_internal_error() {
        let (root, state) = state_with(&[]);
        fs::create_dir_all(root.path().join("app_schema")).unwrap();
        fs::write(root.path().join("app_schema").join("config.json"), "{nope").unwrap();
        let err = schema(State(state)).await.unwrap_err();
        assert!(matches!(err, ApiError::Internal(_)));
    }
}
