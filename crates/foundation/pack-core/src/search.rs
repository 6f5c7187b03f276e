use serde::Serialize;
use tracing::debug;

use crate::store::PackStore;

/// Longest excerpt returned for a single match.
const EXCERPT_CHARS: usize = 300;

/// One search match: the pack and section it came from, plus a
/// truncated prefix of the section text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub pack: String,
    pub section: String,
    pub excerpt: String,
}

/// Case-insensitive substring search over pack sections.
///
/// With a scope only the named pack is searched; otherwise every pack
/// in the catalog. A section matches when the trimmed, lowercased
/// query occurs in `lowercase(key) + " " + lowercase(text)`. Packs
/// that fail to load are skipped rather than failing the search.
pub fn search(store: &PackStore, query: &str, scope: Option<&str>) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    let packs: Vec<String> = match scope {
        Some(name) => vec![name.to_string()],
        None => store.catalog().unwrap_or_default(),
    };

    let mut hits = Vec::new();
    for pack_name in &packs {
        let pack = match store.load(pack_name) {
            Ok(pack) => pack,
            Err(err) => {
                debug!("skipping pack '{pack_name}' during search: {err}");
                continue;
            }
        };
        for (section, text) in pack.sections() {
            let haystack = format!("{} {}", section.to_lowercase(), text.to_lowercase());
            if haystack.contains(&needle) {
                hits.push(SearchHit {
                    pack: pack_name.clone(),
                    section: section.to_string(),
                    excerpt: text.chars().take(EXCERPT_CHARS).collect(),
                });
            }
        }
    }
    hits
}
