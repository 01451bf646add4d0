use crate::document::ScriptInfo;

/// Script Info keys carried over into a new document.
///
/// Everything else (collision hints, editor state, ...) is per-source and is
/// dropped.
pub const SEEDED_FIELDS: [&str; 7] = [
    "PlayResX",
    "PlayResY",
    "ScaledBorderAndShadow",
    "ScriptType",
    "Title",
    "WrapStyle",
    "YCbCr Matrix",
];

/// Build the metadata of a new document from a source document's metadata,
/// keeping only the allow-listed keys in source order.
pub fn seed(source: &ScriptInfo) -> ScriptInfo {
    let mut seeded = ScriptInfo::new();
    for (key, value) in source.iter() {
        if SEEDED_FIELDS.contains(&key) {
            seeded.insert(key, value);
        }
    }
    seeded
}
