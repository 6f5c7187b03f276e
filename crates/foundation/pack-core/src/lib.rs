//! Content pack model and read operations.
//!
//! A pack is one flat JSON document on disk mapping section names to
//! section text. Everything here is a linear scan over a freshly
//! loaded document; nothing is cached between calls.

pub mod pack;
pub mod search;
pub mod store;
pub mod style;

pub use pack::Pack;
pub use search::{search, SearchHit};
pub use store::PackStore;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Pack not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed pack document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pack '{0}': top level is not an object")]
    NotAnObject(String),

    #[error("Pack '{pack}': section '{section}' is not a string")]
    NonStringSection { pack: String, section: String },
}

pub type Result<T> = std::result::Result<T, Error>;
