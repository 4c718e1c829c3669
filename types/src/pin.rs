//! The PIN-entry gate state machine.
//!
//! Four ordered slots hold one decimal digit each. Input arrives through
//! [`PinGate::enter_digit`], [`PinGate::backspace_on_empty`], and
//! [`PinGate::paste_digits`]; each call mutates slot state and reports the
//! side effect the caller should perform (move focus, run validation).
//! Validation against the configured [`SecretPin`] either unlocks the gate
//! permanently or rejects the attempt, flagging every slot for transient
//! error styling until the caller-scheduled reset fires.
//!
//! A wrong PIN is not a hard error: attempts are counted but never gate
//! further tries. Reaching the attempt ceiling only means the caller should
//! reveal a hint.

use thiserror::Error;

use crate::sanitize::sanitize_digits;

/// Number of PIN digit slots.
pub const PIN_LEN: usize = 4;

/// One PIN position: empty or a single decimal digit, plus a transient
/// error flag for rejected-attempt styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PinSlot {
    digit: Option<char>,
    error: bool,
}

impl PinSlot {
    #[must_use]
    pub fn digit(&self) -> Option<char> {
        self.digit
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.digit.is_some()
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error
    }

    fn clear(&mut self) {
        self.digit = None;
        self.error = false;
    }
}

/// The configured secret, validated at construction.
///
/// `Debug` is manually implemented to redact the value so the PIN can never
/// leak into logs or error output.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretPin(String);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SecretPinError {
    #[error("PIN must be exactly {PIN_LEN} characters (got {0})")]
    Length(usize),
    #[error("PIN must contain only decimal digits")]
    NonDigit,
}

impl SecretPin {
    pub fn parse(raw: &str) -> Result<Self, SecretPinError> {
        if raw.chars().count() != PIN_LEN {
            return Err(SecretPinError::Length(raw.chars().count()));
        }
        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(SecretPinError::NonDigit);
        }
        Ok(Self(raw.to_string()))
    }

    fn matches(&self, entered: &str) -> bool {
        self.0 == entered
    }
}

impl std::fmt::Debug for SecretPin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretPin(<redacted>)")
    }
}

/// Where the gate is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    /// Fewer than all slots filled, or waiting for more input.
    AwaitingInput,
    /// A validation just failed; slots carry error styling until the caller
    /// resets the entry.
    Rejected,
    /// The secret matched. Terminal: no further gate mutation is meaningful.
    Unlocked,
}

/// Side effect the caller should perform after an input operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryEffect {
    None,
    /// Move keyboard focus to this slot.
    FocusSlot(usize),
    /// All slots are filled; run [`PinGate::validate`].
    Validate,
}

/// Result of validating the entered digits against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The secret matched; the gate is now permanently unlocked.
    Unlocked,
    /// Mismatch. `attempts` is the running total; `hint_due` is true once the
    /// attempt ceiling has been reached and the hint should be revealed.
    Rejected { attempts: u32, hint_due: bool },
    /// Nothing to validate: slots not all filled, or already unlocked.
    Skipped,
}

/// The PIN gate: slot buffer, attempt counter, and lifecycle phase.
#[derive(Debug, Clone)]
pub struct PinGate {
    slots: [PinSlot; PIN_LEN],
    attempts: u32,
    max_attempts: u32,
    phase: GatePhase,
}

impl PinGate {
    #[must_use]
    pub fn new(max_attempts: u32) -> Self {
        Self {
            slots: [PinSlot::default(); PIN_LEN],
            attempts: 0,
            max_attempts,
            phase: GatePhase::AwaitingInput,
        }
    }

    #[must_use]
    pub fn slots(&self) -> &[PinSlot; PIN_LEN] {
        &self.slots
    }

    /// Total failed attempts so far. Monotonic: never reset within a session.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        self.phase == GatePhase::Unlocked
    }

    fn all_filled(&self) -> bool {
        self.slots.iter().all(PinSlot::is_filled)
    }

    /// Concatenated slot digits, in order. Empty slots contribute nothing.
    #[must_use]
    pub fn entered(&self) -> String {
        self.slots.iter().filter_map(PinSlot::digit).collect()
    }

    /// A fresh input arrived while rejection styling was still showing:
    /// return to normal entry so the new digits render cleanly. The caller
    /// is expected to cancel any pending entry reset alongside this.
    fn leave_rejected(&mut self) {
        if self.phase == GatePhase::Rejected {
            for slot in &mut self.slots {
                slot.error = false;
            }
            self.phase = GatePhase::AwaitingInput;
        }
    }

    /// Apply raw typed input to `slot`.
    ///
    /// Non-digit characters are stripped. If anything remains, the first
    /// digit is stored and focus advances (or validation is requested when
    /// this filled the last remaining slot). An all-noise input clears the
    /// slot instead, which is how deleting a digit in place works.
    pub fn enter_digit(&mut self, slot: usize, raw: &str) -> EntryEffect {
        if self.phase == GatePhase::Unlocked || slot >= PIN_LEN {
            return EntryEffect::None;
        }
        self.leave_rejected();

        let digits = sanitize_digits(raw);
        let Some(digit) = digits.chars().next() else {
            self.slots[slot].digit = None;
            return EntryEffect::None;
        };

        self.slots[slot].digit = Some(digit);
        if slot + 1 < PIN_LEN {
            EntryEffect::FocusSlot(slot + 1)
        } else if self.all_filled() {
            EntryEffect::Validate
        } else {
            EntryEffect::None
        }
    }

    /// Backspace pressed on an already-empty slot: clear the previous slot
    /// and move focus to it. Returns the slot to focus, if any.
    pub fn backspace_on_empty(&mut self, slot: usize) -> Option<usize> {
        if self.phase == GatePhase::Unlocked || slot == 0 || slot >= PIN_LEN {
            return None;
        }
        if self.slots[slot].is_filled() {
            return None;
        }
        self.leave_rejected();
        let previous = slot - 1;
        self.slots[previous].clear();
        Some(previous)
    }

    /// Write pasted text left-to-right from slot 0.
    ///
    /// The text is sanitized to digits and truncated to [`PIN_LEN`]. Slots
    /// beyond the pasted length keep whatever they held before; a full-length
    /// paste requests validation.
    pub fn paste_digits(&mut self, raw: &str) -> EntryEffect {
        if self.phase == GatePhase::Unlocked {
            return EntryEffect::None;
        }
        self.leave_rejected();

        let digits = sanitize_digits(raw);
        let mut written = 0;
        for (slot, digit) in self.slots.iter_mut().zip(digits.chars().take(PIN_LEN)) {
            slot.digit = Some(digit);
            written += 1;
        }
        if written == PIN_LEN {
            EntryEffect::Validate
        } else {
            EntryEffect::None
        }
    }

    /// Compare the entered digits against the secret.
    ///
    /// On a match the gate unlocks permanently. On a mismatch the attempt
    /// counter increments, every slot is flagged for error styling, and the
    /// caller should schedule the entry reset (and the hint reveal when
    /// `hint_due`).
    pub fn validate(&mut self, secret: &SecretPin) -> ValidationOutcome {
        if self.phase == GatePhase::Unlocked || !self.all_filled() {
            return ValidationOutcome::Skipped;
        }

        if secret.matches(&self.entered()) {
            self.phase = GatePhase::Unlocked;
            return ValidationOutcome::Unlocked;
        }

        self.attempts = self.attempts.saturating_add(1);
        for slot in &mut self.slots {
            slot.error = true;
        }
        self.phase = GatePhase::Rejected;
        ValidationOutcome::Rejected {
            attempts: self.attempts,
            hint_due: self.attempts >= self.max_attempts,
        }
    }

    /// Clear every slot and return to plain entry. Fired by the caller's
    /// post-rejection reset timer; focus should return to slot 0.
    pub fn reset_entry(&mut self) {
        if self.phase == GatePhase::Unlocked {
            return;
        }
        for slot in &mut self.slots {
            slot.clear();
        }
        self.phase = GatePhase::AwaitingInput;
    }
}
