//! End-to-end PIN gate behavior through the config pipeline.

use keepsake_engine::{GateStatus, Screen};

use crate::common::{TEST_PIN, app_from, gated_app, ms, unlock};

fn gate_of(app: &keepsake_engine::App) -> &keepsake_engine::GateScreen {
    match app.screen() {
        Screen::Gate(gate) => gate,
        Screen::Main(_) => panic!("expected the gate screen"),
    }
}

#[test]
fn typing_the_configured_pin_unlocks() {
    let mut app = gated_app();
    for digit in TEST_PIN.chars() {
        app.gate_enter_digit(digit);
    }
    assert!(app.is_unlocked());
    // The main screen appears only after the reveal delay.
    assert!(matches!(app.screen(), Screen::Gate(_)));
    app.tick(ms(300));
    assert!(matches!(app.screen(), Screen::Main(_)));
}

#[test]
fn pasted_pin_survives_surrounding_junk() {
    let mut app = gated_app();
    app.gate_paste("PIN: 2-7-4-1!");
    assert!(app.is_unlocked());
}

#[test]
fn wrong_entry_shows_error_then_resets() {
    let mut app = gated_app();
    app.gate_paste("0000");
    assert_eq!(gate_of(&app).status(), GateStatus::Rejected);
    assert_eq!(gate_of(&app).gate().attempts(), 1);

    // Just before the reset delay the entry is still visible.
    app.tick(ms(999));
    assert_eq!(gate_of(&app).gate().entered(), "0000");

    app.tick(ms(1));
    let gate = gate_of(&app);
    assert_eq!(gate.status(), GateStatus::Idle);
    assert!(gate.gate().slots().iter().all(|slot| !slot.is_filled()));
    assert_eq!(gate.focused_slot(), 0);
}

#[test]
fn typing_during_the_reset_window_keeps_the_edit() {
    let mut app = gated_app();
    app.gate_paste("0000");
    app.tick(ms(500));
    app.gate_backspace();
    // The pending reset was cancelled, so the corrected entry survives.
    app.tick(ms(2000));
    assert_eq!(gate_of(&app).gate().entered(), "000");
    assert_eq!(gate_of(&app).status(), GateStatus::Idle);
}

#[test]
fn hint_appears_after_the_configured_attempt_ceiling() {
    let mut app = gated_app();
    for _ in 0..2 {
        app.gate_paste("9999");
        app.tick(ms(1500));
        assert_ne!(gate_of(&app).status(), GateStatus::Hint);
    }
    app.gate_paste("9999");
    // Reset fires at 1000ms, the hint not until 1500ms.
    app.tick(ms(1000));
    assert_eq!(gate_of(&app).status(), GateStatus::Idle);
    app.tick(ms(500));
    assert_eq!(gate_of(&app).status(), GateStatus::Hint);
    assert_eq!(app.hint(), "the bus number");
}

#[test]
fn hint_never_locks_the_gate() {
    let mut app = gated_app();
    for _ in 0..5 {
        app.gate_paste("9999");
        app.tick(ms(2000));
    }
    assert_eq!(gate_of(&app).gate().attempts(), 5);
    unlock(&mut app);
}

#[test]
fn custom_attempt_ceiling_is_honored() {
    let config = r#"
        [gate]
        pin = "2741"
        max_attempts = 1
        hint = "first try counts"
    "#;
    let mut app = app_from(config);
    app.gate_paste("1234");
    app.tick(ms(1500));
    assert_eq!(gate_of(&app).status(), GateStatus::Hint);
}

#[test]
fn rejection_shake_winds_down_with_the_reset() {
    let mut app = gated_app();
    app.gate_paste("0000");
    let early = gate_of(&app).rejection_progress().unwrap();
    assert!(early < 0.1);
    app.tick(ms(500));
    let mid = gate_of(&app).rejection_progress().unwrap();
    assert!(mid > early);
    app.tick(ms(600));
    assert!(gate_of(&app).rejection_progress().is_none());
}
