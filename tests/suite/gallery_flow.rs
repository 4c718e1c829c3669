//! Gallery, lightbox, and envelope flows after unlock.

use keepsake_engine::{
    App, EnvelopeState, LightboxControl, MessageControl, Overlay, Screen,
};
use keepsake_types::Direction;

use crate::common::{TEST_CONFIG, app_from, ms, unlock, unlocked_app};

fn main_of(app: &App) -> &keepsake_engine::MainScreen {
    match app.screen() {
        Screen::Main(main) => main,
        Screen::Gate(_) => panic!("expected the main screen"),
    }
}

fn lightbox_of(app: &App) -> &keepsake_engine::LightboxState {
    match main_of(app).overlay() {
        Some(Overlay::Lightbox(lightbox)) => lightbox,
        _ => panic!("expected the lightbox"),
    }
}

#[test]
fn selection_walks_photos_then_the_envelope() {
    let mut app = unlocked_app();
    assert_eq!(main_of(&app).selected(), 0);
    // 3 photos + the envelope.
    for expected in [1, 2, 3, 0] {
        app.select_next_card();
        assert_eq!(main_of(&app).selected(), expected);
    }
}

#[test]
fn activating_a_photo_opens_the_lightbox_on_it() {
    let mut app = unlocked_app();
    app.select_next_card();
    app.activate_selected();
    let lightbox = lightbox_of(&app);
    assert_eq!(lightbox.index(), 1);
    assert_eq!(lightbox.counter(), "2 / 3");
}

#[test]
fn lightbox_navigation_wraps_both_ways() {
    let mut app = unlocked_app();
    app.activate_selected();
    app.lightbox_navigate(Direction::Prev);
    assert_eq!(lightbox_of(&app).counter(), "3 / 3");
    app.lightbox_navigate(Direction::Next);
    assert_eq!(lightbox_of(&app).counter(), "1 / 3");
}

#[test]
fn lightbox_focus_seeds_then_cycles() {
    let mut app = unlocked_app();
    app.activate_selected();
    // Focus lands on Close only after the seed delay.
    assert_eq!(lightbox_of(&app).focused(), None);
    app.tick(ms(100));
    assert_eq!(lightbox_of(&app).focused(), Some(LightboxControl::Close));

    app.overlay_focus_move(true);
    assert_eq!(lightbox_of(&app).focused(), Some(LightboxControl::Prev));
    app.overlay_focus_move(false);
    app.overlay_focus_move(false);
    // Shift+Tab wraps from Close to Next.
    assert_eq!(lightbox_of(&app).focused(), Some(LightboxControl::Next));
}

#[test]
fn activating_the_focused_close_control_dismisses() {
    let mut app = unlocked_app();
    app.activate_selected();
    app.tick(ms(100));
    app.overlay_activate_focused();
    assert!(main_of(&app).overlay().is_none());
}

#[test]
fn gallery_selection_is_frozen_under_an_overlay() {
    let mut app = unlocked_app();
    app.activate_selected();
    app.select_next_card();
    assert_eq!(main_of(&app).selected(), 0);
}

#[test]
fn envelope_opens_the_message_after_its_animation() {
    let mut app = unlocked_app();
    for _ in 0..3 {
        app.select_next_card();
    }
    app.activate_selected();
    assert!(matches!(main_of(&app).envelope(), EnvelopeState::Opening(_)));
    assert!(main_of(&app).overlay().is_none());

    app.tick(ms(600));
    assert!(matches!(main_of(&app).envelope(), EnvelopeState::Opened));
    let Some(Overlay::Message(_)) = main_of(&app).overlay() else {
        panic!("expected the message modal");
    };
    assert_eq!(app.message().len(), 2);
    assert!(!app.confetti().is_empty());
}

#[test]
fn message_close_control_works_and_envelope_stays_open() {
    let mut app = unlocked_app();
    app.open_envelope();
    app.tick(ms(600));
    // The focus seed is scheduled when the modal opens, one frame later.
    app.tick(ms(100));
    let Some(Overlay::Message(modal)) = main_of(&app).overlay() else {
        panic!("expected the message modal");
    };
    assert_eq!(modal.focused(), Some(MessageControl::Close));
    app.overlay_activate_focused();
    assert!(main_of(&app).overlay().is_none());
    assert!(main_of(&app).envelope().is_open());
}

#[test]
fn confetti_outlives_the_modal_but_not_its_lifetime() {
    let mut app = unlocked_app();
    app.open_envelope();
    app.tick(ms(600));
    app.escape();
    assert!(!app.confetti().is_empty());
    app.tick(ms(4000));
    assert!(app.confetti().is_empty());
}

#[test]
fn reduced_motion_skips_the_burst() {
    let config = format!("{TEST_CONFIG}\n[app]\nreduced_motion = true\n");
    let mut app = app_from(&config);
    unlock(&mut app);
    app.open_envelope();
    app.tick(ms(0));
    assert!(matches!(main_of(&app).overlay(), Some(Overlay::Message(_))));
    assert!(app.confetti().is_empty());
}

#[test]
fn reopening_the_lightbox_reseeds_focus() {
    let mut app = unlocked_app();
    app.activate_selected();
    app.tick(ms(100));
    app.overlay_focus_move(true);
    assert_eq!(lightbox_of(&app).focused(), Some(LightboxControl::Prev));
    app.escape();

    app.activate_selected();
    // A fresh overlay starts unseeded again.
    assert_eq!(lightbox_of(&app).focused(), None);
    app.tick(ms(100));
    assert_eq!(lightbox_of(&app).focused(), Some(LightboxControl::Close));
}
