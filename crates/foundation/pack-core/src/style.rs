use serde_json::{json, Value};

/// Fonts shipped with every render payload.
const FONTS: [&str; 2] = ["Inter", "Nunito"];

/// Fixed palette per known theme. Unknown themes get an empty record
/// and the consumer falls back to its own defaults.
fn palette(theme: &str) -> Value {
    match theme {
        "nlp" => json!({"bg": "#ffffff", "primary": "#0B5F9A", "accent": "#2A9D7D"}),
        "hypnosis" => json!({"bg": "#e8f2ff", "primary": "#4750B8", "accent": "#2AA199"}),
        "sales" => json!({"bg": "#fff9e6", "primary": "#D9534F", "accent": "#E89E2D"}),
        _ => json!({}),
    }
}

/// Style block attached to render payloads: theme name, its palette,
/// and the font stack.
pub fn style_block(pack_name: &str) -> Value {
    let theme = pack_name.to_lowercase();
    json!({
        "theme": theme,
        "palette": palette(&theme),
        "fonts": FONTS,
    })
}
