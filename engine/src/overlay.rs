//! Overlay state: the photo lightbox and the envelope message modal.
//!
//! Each overlay engages a fresh [`FocusRing`] over its controls when it
//! opens and runs a short entry effect; initial focus is seeded by a
//! deferred action so the entry animation settles first.

use std::time::Duration;

use keepsake_types::{Direction, EffectTimer, FocusRing, advance, counter_label};

/// Delay before focus lands on an overlay's first control.
pub const FOCUS_SEED_DELAY: Duration = Duration::from_millis(100);
/// How long the envelope-opening animation runs before the modal appears.
pub const ENVELOPE_OPEN_DELAY: Duration = Duration::from_millis(600);
/// Duration of an overlay's entry effect.
pub const OVERLAY_ENTRY_DURATION: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxControl {
    Close,
    Prev,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageControl {
    Close,
}

/// Lightbox viewer over the photo sequence.
#[derive(Debug)]
pub struct LightboxState {
    index: usize,
    count: usize,
    trap: FocusRing<LightboxControl>,
    entry: EffectTimer,
    seeded: bool,
}

impl LightboxState {
    /// Open at `index`. `count` must be >= 1; the gallery guards empty.
    #[must_use]
    pub fn open(index: usize, count: usize) -> Self {
        let controls = [
            LightboxControl::Close,
            LightboxControl::Prev,
            LightboxControl::Next,
        ];
        Self {
            index,
            count,
            trap: FocusRing::engage(controls),
            entry: EffectTimer::new(OVERLAY_ENTRY_DURATION),
            seeded: false,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The 1-based "position / total" counter text.
    #[must_use]
    pub fn counter(&self) -> String {
        counter_label(self.index, self.count)
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.index = advance(direction, self.index, self.count);
    }

    #[must_use]
    pub fn focused(&self) -> Option<LightboxControl> {
        self.seeded.then(|| self.trap.focused()).flatten()
    }

    pub fn focus_next(&mut self) {
        if self.seeded {
            self.trap.focus_next();
        } else {
            self.seed_focus();
        }
    }

    pub fn focus_prev(&mut self) {
        if self.seeded {
            self.trap.focus_prev();
        } else {
            self.seeded = true;
            self.trap.focus_prev();
        }
    }

    pub(crate) fn seed_focus(&mut self) {
        self.seeded = true;
        self.trap.focus_first();
    }

    #[must_use]
    pub fn entry_progress(&self) -> f32 {
        self.entry.progress()
    }

    pub(crate) fn advance_time(&mut self, delta: Duration) {
        self.entry.advance(delta);
    }
}

/// The envelope message modal.
#[derive(Debug)]
pub struct MessageState {
    trap: FocusRing<MessageControl>,
    entry: EffectTimer,
    seeded: bool,
}

impl MessageState {
    #[must_use]
    pub fn open() -> Self {
        Self {
            trap: FocusRing::engage([MessageControl::Close]),
            entry: EffectTimer::new(OVERLAY_ENTRY_DURATION),
            seeded: false,
        }
    }

    #[must_use]
    pub fn focused(&self) -> Option<MessageControl> {
        self.seeded.then(|| self.trap.focused()).flatten()
    }

    pub fn focus_next(&mut self) {
        if self.seeded {
            self.trap.focus_next();
        } else {
            self.seed_focus();
        }
    }

    pub fn focus_prev(&mut self) {
        if self.seeded {
            self.trap.focus_prev();
        } else {
            self.seeded = true;
            self.trap.focus_prev();
        }
    }

    pub(crate) fn seed_focus(&mut self) {
        self.seeded = true;
        self.trap.focus_first();
    }

    #[must_use]
    pub fn entry_progress(&self) -> f32 {
        self.entry.progress()
    }

    pub(crate) fn advance_time(&mut self, delta: Duration) {
        self.entry.advance(delta);
    }
}

/// The overlay currently covering the main screen, if any.
#[derive(Debug)]
pub enum Overlay {
    Lightbox(LightboxState),
    Message(MessageState),
}

/// Envelope button lifecycle on the main screen.
#[derive(Debug)]
pub enum EnvelopeState {
    Closed,
    /// Opening animation running; the modal opens when the deferred action
    /// fires.
    Opening(EffectTimer),
    Opened,
}

impl EnvelopeState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, EnvelopeState::Opening(_) | EnvelopeState::Opened)
    }
}
