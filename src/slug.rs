/// Derive a URL-safe slug from a display name: lowercase, runs of
/// whitespace/hyphens/underscores become a single hyphen, remaining
/// punctuation is dropped, and the result is truncated to `max_len`.
///
/// Slugs are derived once, on first save; renaming a record later does not
/// re-derive its slug.
pub fn slugify(value: &str, max_len: usize) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_hyphen = true;
        }
        // other punctuation ("Men's" -> "mens") is dropped without a separator
    }

    // ASCII-only by construction, so byte truncation is safe
    slug.truncate(max_len);
    slug.trim_end_matches('-').to_string()
}
