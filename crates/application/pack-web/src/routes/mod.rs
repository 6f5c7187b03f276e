pub mod health;
pub mod packs;
pub mod preview;
pub mod render;
pub mod schema;
pub mod search;

use serde::Deserialize;
use serde_json::Value;

/// Body shared by `/get_pack` and `/render_payload`.
#[derive(Debug, Deserialize)]
pub struct PackRequest {
    pub pack: String,
    pub sections: Option<Vec<String>>,
    pub format: Option<String>,
    pub options: Option<Value>,
}
