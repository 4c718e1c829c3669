//! Core domain types for Keepsake.
//!
//! This crate contains pure interaction-state types with no IO, no async, and
//! no rendering dependencies. The PIN gate, focus ring, and carousel logic
//! live here so every state transition can be exercised without a terminal.

mod anim;
mod carousel;
mod color;
mod focus;
mod pin;
mod sanitize;
mod text;

pub use anim::{AnimPhase, EffectTimer};
pub use carousel::{Direction, advance, counter_label};
pub use color::{HexColor, HexColorError};
pub use focus::FocusRing;
pub use pin::{
    EntryEffect, GatePhase, PIN_LEN, PinGate, PinSlot, SecretPin, SecretPinError,
    ValidationOutcome,
};
pub use sanitize::sanitize_digits;
pub use text::paragraphs;
