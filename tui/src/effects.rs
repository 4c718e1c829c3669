//! Rect transforms for overlay entry effects and the rejection shake.

use ratatui::layout::Rect;

/// Scale `base` around its center for an overlay entry pop.
///
/// `progress` is the entry timer's normalized progress; at 1.0 the rect is
/// returned untouched.
#[must_use]
pub fn entry_pop(progress: f32, base: Rect) -> Rect {
    let t = ease_out_cubic(progress);
    let scale = 0.6 + 0.4 * t;
    scale_rect(base, scale)
}

/// Horizontal shake applied to the PIN slots while a rejection is showing.
///
/// `progress` runs over the reset delay window; the amplitude decays to zero
/// so the slots come to rest before they are wiped.
#[must_use]
pub fn rejection_shake(progress: f32, base: Rect, viewport: Rect) -> Rect {
    let t = progress.clamp(0.0, 1.0);
    let decay = 1.0 - t;
    let oscillations = 4.0;
    let amplitude = 2.0;
    let offset = (f32::sin(t * std::f32::consts::TAU * oscillations) * amplitude * decay).round()
        as i32;
    let viewport_left = i32::from(viewport.x);
    let viewport_right = i32::from(viewport.x) + i32::from(viewport.width);
    let max_x = (viewport_right - i32::from(base.width)).max(viewport_left);
    let x = (i32::from(base.x) + offset).clamp(viewport_left, max_x) as u16;
    Rect { x, ..base }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::{entry_pop, rejection_shake};
    use ratatui::layout::Rect;

    #[test]
    fn entry_pop_finishes_at_full_size() {
        let base = Rect::new(10, 5, 40, 20);
        assert_eq!(entry_pop(1.0, base), base);
    }

    #[test]
    fn entry_pop_starts_smaller_and_centered() {
        let base = Rect::new(10, 5, 40, 20);
        let popped = entry_pop(0.0, base);
        assert!(popped.width < base.width);
        assert!(popped.x > base.x);
        assert!(popped.right() < base.right());
    }

    #[test]
    fn shake_stays_inside_the_viewport() {
        let viewport = Rect::new(0, 0, 30, 10);
        let base = Rect::new(1, 4, 28, 3);
        for step in 0..=20 {
            let shaken = rejection_shake(step as f32 / 20.0, base, viewport);
            assert!(shaken.x >= viewport.x);
            assert!(shaken.right() <= viewport.right());
        }
    }

    #[test]
    fn shake_settles_at_rest() {
        let viewport = Rect::new(0, 0, 80, 24);
        let base = Rect::new(20, 10, 30, 3);
        assert_eq!(rejection_shake(1.0, base, viewport), base);
    }
}
