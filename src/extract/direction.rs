use std::sync::LazyLock;

use regex::Regex;

use crate::model::target::Direction;

static RE_UP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)↑|\b(?:reach(?:es|ed)?|hits?|above|exceeds?)\b").unwrap()
});

static RE_DOWN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)↓|\b(?:drops?|fall(?:s|en)?|dips?|below)\b").unwrap()
});

/// Decide whether a market title claims an upside ("reach price X or
/// above") or downside ("drop to price X or below") event.
///
/// Upside markers win when both appear; "reach" dominates real-world
/// phrasing like "reach $X before falling to $Y". `None` when the title
/// carries neither marker; such entries are dropped before the ladder
/// build, never silently assigned a direction.
pub fn classify_direction(text: &str) -> Option<Direction> {
    if RE_UP.is_match(text) {
        Some(Direction::Up)
    } else if RE_DOWN.is_match(text) {
        Some(Direction::Down)
    } else {
        None
    }
}
