/// Hex md5 of `parts`, separated so that `["ab", "c"]` and `["a", "bc"]`
/// produce different keys.
pub fn cache_key(parts: &[&str]) -> String {
    let combined = parts.join("\u{1f}");
    format!("{:x}", md5::compute(combined.as_bytes()))
}
