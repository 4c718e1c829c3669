//! Wrap-around index arithmetic for the lightbox carousel.

/// Navigation direction through an ordered item sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Step `current` one position in `direction`, wrapping at both ends.
///
/// `count` must be at least 1; callers guard the empty case.
#[must_use]
pub fn advance(direction: Direction, current: usize, count: usize) -> usize {
    debug_assert!(count >= 1, "carousel requires at least one item");
    match direction {
        Direction::Next => (current + 1) % count,
        Direction::Prev => (current + count - 1) % count,
    }
}

/// The 1-based "position / total" label shown under the lightbox.
#[must_use]
pub fn counter_label(current: usize, count: usize) -> String {
    format!("{} / {}", current + 1, count)
}
