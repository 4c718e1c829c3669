//! Input sanitizing for PIN entry.
//!
//! Typed and pasted text may contain anything the terminal lets through;
//! the gate only ever sees decimal digits. Non-digit characters are dropped
//! silently rather than reported as errors.

/// Strip everything but ASCII decimal digits from `input`.
#[must_use]
pub fn sanitize_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}
