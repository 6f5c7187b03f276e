use serde_json::{Map, Value};

use crate::{Error, Result};

/// One loaded content pack: an ordered list of named text sections.
///
/// Section order is the insertion order of the backing document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pack {
    name: String,
    sections: Vec<(String, String)>,
}

impl Pack {
    /// Validate a parsed JSON document into a pack.
    ///
    /// The top level must be an object and every value a string;
    /// anything else is rejected at the door instead of flowing
    /// untyped into search and rendering.
    pub fn from_value(name: &str, value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::NotAnObject(name.to_string()));
        };
        let mut sections = Vec::with_capacity(map.len());
        for (key, value) in map {
            match value {
                Value::String(text) => sections.push((key, text)),
                _ => {
                    return Err(Error::NonStringSection {
                        pack: name.to_string(),
                        section: key,
                    });
                }
            }
        }
        Ok(Self {
            name: name.to_string(),
            sections,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate sections in document order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sections restricted to `keys`, in pack order.
    ///
    /// An empty or absent key list selects everything; requested keys
    /// with no matching section are silently ignored.
    pub fn filtered(&self, keys: Option<&[String]>) -> Vec<(&str, &str)> {
        match keys {
            None | Some([]) => self.sections().collect(),
            Some(keys) => self
                .sections()
                .filter(|(k, _)| keys.iter().any(|want| want == k))
                .collect(),
        }
    }

    /// JSON object view of the filtered sections, preserving order.
    pub fn filtered_json(&self, keys: Option<&[String]>) -> Value {
        let mut map = Map::new();
        for (k, v) in self.filtered(keys) {
            map.insert(k.to_string(), Value::String(v.to_string()));
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Pack {
        Pack::from_value(
            "sales",
            json!({
                "opening": "Build rapport fast.",
                "discovery": "Ask open questions.",
                "closing": "Ask for the sale.",
            }),
        )
        .unwrap()
    }

    #[test]
    fn sections_keep_document_order() {
        let pack = sample();
        let keys: Vec<&str> = pack.sections().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["opening", "discovery", "closing"]);
    }

    #[test]
    fn filter_returns_requested_subset_in_pack_order() {
        let pack = sample();
        let keys = vec!["closing".to_string(), "opening".to_string()];
        let filtered = pack.filtered(Some(&keys));
        assert_eq!(
            filtered,
            vec![
                ("opening", "Build rapport fast."),
                ("closing", "Ask for the sale."),
            ]
        );
    }

    #[test]
    fn filter_with_no_keys_returns_everything() {
        let pack = sample();
        assert_eq!(pack.filtered(None).len(), 3);
        assert_eq!(pack.filtered(Some(&[])).len(), 3);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let pack = sample();
        let keys = vec!["opening".to_string(), "ghost".to_string()];
        let filtered = pack.filtered(Some(&keys));
        assert_eq!(filtered, vec![("opening", "Build rapport fast.")]);
    }

    #[test]
    fn filtered_json_is_an_ordered_object() {
        let pack = sample();
        let value = pack.filtered_json(None);
        assert_eq!(
            value,
            json!({
                "opening": "Build rapport fast.",
                "discovery": "Ask open questions.",
                "closing": "Ask for the sale.",
            })
        );
    }

    #[test]
    fn non_object_documents_are_rejected() {
        let err = Pack::from_value("sales", json!(["not", "a", "pack"])).unwrap_err();
        assert!(matches!(err, Error::NotAnObject(name) if name == "sales"));
    }

    #[test]
    fn non_string_sections_are_rejected() {
        let err = Pack::from_value("sales", json!({"opening": 42})).unwrap_err();
        assert!(matches!(
            err,
            Error::NonStringSection { pack, section } if pack == "sales" && section == "opening"
        ));
    }
}
