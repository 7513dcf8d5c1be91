/// Lowercase and trim. An empty result means the message is not embedded.
pub fn preprocess(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Cache key for preprocessed text: blake3 hex digest.
pub fn content_hash(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}
