//! Keyboard-focus confinement for overlay controls.
//!
//! A [`FocusRing`] is engaged with the live set of focusable controls each
//! time an overlay opens; the set is never cached across opens, so overlays
//! whose contents change between showings re-derive it naturally. Tab on the
//! last control wraps to the first and Shift+Tab on the first wraps to the
//! last. Engaging with an empty set is valid and degrades every operation to
//! a no-op.

/// Ordered ring of focusable controls with one current position.
#[derive(Debug, Clone)]
pub struct FocusRing<T> {
    items: Vec<T>,
    current: usize,
}

impl<T: Copy + Eq> FocusRing<T> {
    /// Build a ring from the overlay's focusable controls, in tab order.
    pub fn engage(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            current: 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The control that currently holds focus, if the ring has any.
    #[must_use]
    pub fn focused(&self) -> Option<T> {
        self.items.get(self.current).copied()
    }

    /// Seed focus on the first control. Returns it so the caller can apply
    /// the focus move.
    pub fn focus_first(&mut self) -> Option<T> {
        self.current = 0;
        self.focused()
    }

    /// Advance focus forward (Tab), wrapping from last to first.
    pub fn focus_next(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.items.len();
        self.focused()
    }

    /// Move focus backward (Shift+Tab), wrapping from first to last.
    pub fn focus_prev(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        self.current = (self.current + self.items.len() - 1) % self.items.len();
        self.focused()
    }

    /// Focus a specific control, if present. Returns whether it was found.
    pub fn focus(&mut self, item: T) -> bool {
        if let Some(position) = self.items.iter().position(|candidate| *candidate == item) {
            self.current = position;
            true
        } else {
            false
        }
    }
}
