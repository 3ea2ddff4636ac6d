/// Derive a filesystem- and URL-safe identifier from a display name.
///
/// Lowercases, collapses runs of non-alphanumeric characters to single
/// hyphens, and trims leading/trailing hyphens. Names that reduce to
/// nothing fall back to `entity`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut pending_hyphen = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        "entity".to_string()
    } else {
        slug
    }
}
