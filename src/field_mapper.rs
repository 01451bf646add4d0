use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// @module: Translation between ASS column names and model attribute names

// @const: Any upper-case ASCII letter
static UPPERCASE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").unwrap());

/// Map an external ASS field name to the canonical attribute name.
///
/// `StartTime` becomes `start_time`, `MarginL` becomes `margin_l`. The ASS
/// format spells `colour` and `color` inconsistently, so every `colour` in the
/// result is normalized to `color`.
pub fn canonical_name(external: &str) -> String {
    let mut chars = external.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let lowered: String = first.to_lowercase().chain(chars).collect();
    let snake = UPPERCASE_REGEX.replace_all(&lowered, |caps: &Captures| {
        format!("_{}", caps[0].to_ascii_lowercase())
    });

    snake.replace("colour", "color")
}
