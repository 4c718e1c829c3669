//! The PIN gate screen: focus, status line, and the deferred-action wiring
//! around the pure [`PinGate`] machine.

use std::time::Duration;

use keepsake_types::{EffectTimer, EntryEffect, PIN_LEN, PinGate, SecretPin, ValidationOutcome};

use crate::Action;
use crate::schedule::{Scheduler, TimerId};

/// Delay before a rejected entry is wiped and focus returns to slot 0.
pub const RESET_DELAY: Duration = Duration::from_millis(1000);
/// Delay before the hint appears once the attempt ceiling is reached.
pub const HINT_DELAY: Duration = Duration::from_millis(1500);
/// Delay between the unlock signal and the main content reveal.
pub const UNLOCK_REVEAL_DELAY: Duration = Duration::from_millis(300);

/// What the status line under the slots is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    Idle,
    /// "Incorrect PIN" message while rejection styling is visible.
    Rejected,
    /// The hint string is showing. Entry remains fully usable.
    Hint,
}

/// Gate screen state. Owns the slot machine, the focused slot, and the
/// handle to the pending entry reset (cancelled by any new input).
#[derive(Debug)]
pub struct GateScreen {
    gate: PinGate,
    focused_slot: usize,
    status: GateStatus,
    pending_reset: Option<TimerId>,
    shake: Option<EffectTimer>,
}

impl GateScreen {
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            gate: PinGate::new(max_attempts),
            focused_slot: 0,
            status: GateStatus::Idle,
            pending_reset: None,
            shake: None,
        }
    }

    #[must_use]
    pub fn gate(&self) -> &PinGate {
        &self.gate
    }

    #[must_use]
    pub fn focused_slot(&self) -> usize {
        self.focused_slot
    }

    #[must_use]
    pub fn status(&self) -> GateStatus {
        self.status
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.gate.is_unlocked()
    }

    pub fn move_focus_left(&mut self) {
        self.focused_slot = self.focused_slot.saturating_sub(1);
    }

    pub fn move_focus_right(&mut self) {
        self.focused_slot = (self.focused_slot + 1).min(PIN_LEN - 1);
    }

    /// New input while a reset is pending cancels the reset so it cannot
    /// wipe digits typed during the delay window.
    fn cancel_pending_reset(&mut self, scheduler: &mut Scheduler<Action>) {
        if let Some(id) = self.pending_reset.take() {
            scheduler.cancel(id);
        }
        if self.status == GateStatus::Rejected {
            self.status = GateStatus::Idle;
        }
        self.shake = None;
    }

    pub fn enter_digit(
        &mut self,
        digit: char,
        secret: &SecretPin,
        scheduler: &mut Scheduler<Action>,
    ) {
        if self.gate.is_unlocked() {
            return;
        }
        self.cancel_pending_reset(scheduler);
        match self.gate.enter_digit(self.focused_slot, digit.encode_utf8(&mut [0; 4])) {
            EntryEffect::FocusSlot(next) => self.focused_slot = next,
            EntryEffect::Validate => self.run_validation(secret, scheduler),
            EntryEffect::None => {}
        }
    }

    /// Backspace: clear the focused slot if it holds a digit, otherwise hop
    /// back and clear the previous slot.
    pub fn backspace(&mut self, scheduler: &mut Scheduler<Action>) {
        if self.gate.is_unlocked() {
            return;
        }
        self.cancel_pending_reset(scheduler);
        if self.gate.slots()[self.focused_slot].is_filled() {
            self.gate.enter_digit(self.focused_slot, "");
        } else if let Some(previous) = self.gate.backspace_on_empty(self.focused_slot) {
            self.focused_slot = previous;
        }
    }

    pub fn paste(&mut self, text: &str, secret: &SecretPin, scheduler: &mut Scheduler<Action>) {
        if self.gate.is_unlocked() {
            return;
        }
        self.cancel_pending_reset(scheduler);
        if self.gate.paste_digits(text) == EntryEffect::Validate {
            self.run_validation(secret, scheduler);
        }
    }

    fn run_validation(&mut self, secret: &SecretPin, scheduler: &mut Scheduler<Action>) {
        match self.gate.validate(secret) {
            ValidationOutcome::Unlocked => {
                tracing::info!("pin accepted, unlocking");
                scheduler.schedule(UNLOCK_REVEAL_DELAY, Action::RevealMain);
            }
            ValidationOutcome::Rejected { attempts, hint_due } => {
                tracing::info!(attempts, "pin rejected");
                self.status = GateStatus::Rejected;
                self.shake = Some(EffectTimer::new(RESET_DELAY));
                self.pending_reset = Some(scheduler.schedule(RESET_DELAY, Action::ResetGateEntry));
                if hint_due {
                    scheduler.schedule(HINT_DELAY, Action::RevealHint);
                }
            }
            ValidationOutcome::Skipped => {}
        }
    }

    /// Shake progress while rejection styling is showing, in `[0.0, 1.0]`.
    #[must_use]
    pub fn rejection_progress(&self) -> Option<f32> {
        self.shake.as_ref().map(EffectTimer::progress)
    }

    /// Age the rejection shake by the frame delta.
    pub(crate) fn advance_time(&mut self, delta: Duration) {
        if let Some(timer) = &mut self.shake {
            timer.advance(delta);
            if timer.is_finished() {
                self.shake = None;
            }
        }
    }

    /// The entry reset fired: wipe the slots and return focus to slot 0.
    pub(crate) fn apply_reset(&mut self) {
        self.pending_reset = None;
        self.shake = None;
        self.gate.reset_entry();
        self.focused_slot = 0;
        if self.status == GateStatus::Rejected {
            self.status = GateStatus::Idle;
        }
    }

    pub(crate) fn reveal_hint(&mut self) {
        if !self.gate.is_unlocked() {
            self.status = GateStatus::Hint;
        }
    }
}
