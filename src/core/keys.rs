use super::carousel::Direction;

/// Keys that activate a focused card like a click.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Global carousel arrows: right advances, left goes back.
#[inline]
pub fn carousel_direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowRight" => Some(Direction::Next),
        "ArrowLeft" => Some(Direction::Prev),
        _ => None,
    }
}

/// Selector for an in-page anchor `href`, or `None` when it names nothing
/// (a bare `#`, an empty string, or a non-hash link).
#[inline]
pub fn hash_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(rest) if !rest.is_empty() => Some(href),
        _ => None,
    }
}
