//! Application state machine for Keepsake - no TUI dependencies.
//!
//! [`App`] owns the whole interaction state: the PIN gate screen, the
//! gallery with its lightbox and envelope overlays, the confetti burst, and
//! the scheduler that drives every deferred action. The TUI layer calls the
//! input methods and renders whatever the accessors expose; nothing in this
//! crate touches a terminal.

use std::time::Duration;

use thiserror::Error;

use keepsake_types::{Direction, EffectTimer, SecretPin, SecretPinError, paragraphs};

mod config;
mod confetti;
mod gate;
mod overlay;
mod schedule;

pub use config::{AppConfig, ConfigError, GateConfig, KeepsakeConfig, PhotoConfig, ThemeConfig};
pub use confetti::{CONFETTI_COUNT, CONFETTI_LIFETIME, ConfettiBurst, Particle};
pub use gate::{GateScreen, GateStatus, HINT_DELAY, RESET_DELAY, UNLOCK_REVEAL_DELAY};
pub use overlay::{
    ENVELOPE_OPEN_DELAY, EnvelopeState, FOCUS_SEED_DELAY, LightboxControl, LightboxState,
    MessageControl, MessageState, OVERLAY_ENTRY_DURATION, Overlay,
};
pub use schedule::{Scheduler, TimerId};

/// Number of theme colors confetti particles index into.
pub const CONFETTI_COLOR_COUNT: usize = 3;

const DEFAULT_HINT: &str = "Hint: think of a special date...";

/// Deferred one-shot actions fired by the frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Wipe a rejected entry and refocus slot 0.
    ResetGateEntry,
    /// Show the hint after the attempt ceiling was reached.
    RevealHint,
    /// Swap the gate out for the main content after the unlock fade.
    RevealMain,
    /// The envelope animation finished; open the message modal.
    OpenMessageModal,
    /// Move focus onto the current overlay's first control.
    SeedOverlayFocus,
}

/// A gallery photo.
#[derive(Debug, Clone)]
pub struct Photo {
    pub filename: String,
    pub alt: Option<String>,
}

impl Photo {
    /// Text shown for the photo: the alt text, or the filename.
    #[must_use]
    pub fn label(&self) -> &str {
        self.alt.as_deref().unwrap_or(&self.filename)
    }
}

/// Presentation switches resolved from `[app]` config.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    pub reduced_motion: bool,
}

impl From<AppConfig> for UiOptions {
    fn from(config: AppConfig) -> Self {
        Self {
            ascii_only: config.ascii_only,
            high_contrast: config.high_contrast,
            reduced_motion: config.reduced_motion,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid [gate].pin in config")]
    InvalidPin(#[from] SecretPinError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The gallery screen shown after unlock.
#[derive(Debug)]
pub struct MainScreen {
    /// Selected card: photo indices first, then the envelope button.
    selected: usize,
    overlay: Option<Overlay>,
    envelope: EnvelopeState,
}

impl MainScreen {
    fn new() -> Self {
        Self {
            selected: 0,
            overlay: None,
            envelope: EnvelopeState::Closed,
        }
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn envelope(&self) -> &EnvelopeState {
        &self.envelope
    }
}

/// Which screen the app is showing.
#[derive(Debug)]
pub enum Screen {
    Gate(GateScreen),
    Main(MainScreen),
}

/// The whole application state.
#[derive(Debug)]
pub struct App {
    secret: SecretPin,
    photos: Vec<Photo>,
    message: Vec<String>,
    hint: String,
    theme: ThemeConfig,
    options: UiOptions,
    screen: Screen,
    scheduler: Scheduler<Action>,
    confetti: ConfettiBurst,
}

impl App {
    /// Build from the first config file found, or the built-in demo.
    pub fn new() -> Result<Self, AppError> {
        let config = KeepsakeConfig::load()?.unwrap_or_else(KeepsakeConfig::demo);
        Self::from_config(config)
    }

    pub fn from_config(config: KeepsakeConfig) -> Result<Self, AppError> {
        let gate = config.gate.unwrap_or_default();
        let secret = SecretPin::parse(&gate.pin)?;
        let photos = config
            .photos
            .into_iter()
            .map(|photo| Photo {
                filename: photo.filename,
                alt: photo.alt,
            })
            .collect();
        let message = paragraphs(config.message.as_deref().unwrap_or_default());
        Ok(Self {
            secret,
            photos,
            message,
            hint: gate.hint.unwrap_or_else(|| DEFAULT_HINT.to_string()),
            theme: config.theme.unwrap_or_default(),
            options: config.app.map(UiOptions::from).unwrap_or_default(),
            screen: Screen::Gate(GateScreen::new(gate.max_attempts)),
            scheduler: Scheduler::new(),
            confetti: ConfettiBurst::default(),
        })
    }

    // ------------------------------------------------------------------
    // Accessors for rendering
    // ------------------------------------------------------------------

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Message paragraphs for the envelope modal.
    #[must_use]
    pub fn message(&self) -> &[String] {
        &self.message
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    #[must_use]
    pub fn options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn confetti(&self) -> &ConfettiBurst {
        &self.confetti
    }

    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        match &self.screen {
            Screen::Gate(gate) => gate.is_unlocked(),
            Screen::Main(_) => true,
        }
    }

    // ------------------------------------------------------------------
    // Frame tick
    // ------------------------------------------------------------------

    /// Advance all deferred actions and animation timers by `delta`.
    pub fn tick(&mut self, delta: Duration) {
        for action in self.scheduler.advance(delta) {
            self.apply(action);
        }

        match &mut self.screen {
            Screen::Gate(gate) => gate.advance_time(delta),
            Screen::Main(main) => {
                if let EnvelopeState::Opening(timer) = &mut main.envelope {
                    timer.advance(delta);
                    if timer.is_finished() {
                        main.envelope = EnvelopeState::Opened;
                    }
                }
                match &mut main.overlay {
                    Some(Overlay::Lightbox(lightbox)) => lightbox.advance_time(delta),
                    Some(Overlay::Message(modal)) => modal.advance_time(delta),
                    None => {}
                }
            }
        }

        self.confetti.advance(delta);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::ResetGateEntry => {
                if let Screen::Gate(gate) = &mut self.screen {
                    gate.apply_reset();
                }
            }
            Action::RevealHint => {
                if let Screen::Gate(gate) = &mut self.screen {
                    gate.reveal_hint();
                }
            }
            Action::RevealMain => {
                tracing::debug!("revealing main content");
                self.screen = Screen::Main(MainScreen::new());
            }
            Action::OpenMessageModal => self.open_message_modal(),
            Action::SeedOverlayFocus => {
                if let Screen::Main(main) = &mut self.screen {
                    match &mut main.overlay {
                        Some(Overlay::Lightbox(lightbox)) => lightbox.seed_focus(),
                        Some(Overlay::Message(modal)) => modal.seed_focus(),
                        None => {}
                    }
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Gate input
    // ------------------------------------------------------------------

    pub fn gate_enter_digit(&mut self, digit: char) {
        if let Screen::Gate(gate) = &mut self.screen {
            gate.enter_digit(digit, &self.secret, &mut self.scheduler);
        }
    }

    pub fn gate_backspace(&mut self) {
        if let Screen::Gate(gate) = &mut self.screen {
            gate.backspace(&mut self.scheduler);
        }
    }

    pub fn gate_paste(&mut self, text: &str) {
        if let Screen::Gate(gate) = &mut self.screen {
            gate.paste(text, &self.secret, &mut self.scheduler);
        }
    }

    pub fn gate_move_focus(&mut self, direction: Direction) {
        if let Screen::Gate(gate) = &mut self.screen {
            match direction {
                Direction::Prev => gate.move_focus_left(),
                Direction::Next => gate.move_focus_right(),
            }
        }
    }

    // ------------------------------------------------------------------
    // Gallery input
    // ------------------------------------------------------------------

    /// Number of selectable cards: every photo plus the envelope button.
    fn card_count(&self) -> usize {
        self.photos.len() + 1
    }

    pub fn select_next_card(&mut self) {
        let count = self.card_count();
        if let Screen::Main(main) = &mut self.screen
            && main.overlay.is_none()
        {
            main.selected = (main.selected + 1) % count;
        }
    }

    pub fn select_prev_card(&mut self) {
        let count = self.card_count();
        if let Screen::Main(main) = &mut self.screen
            && main.overlay.is_none()
        {
            main.selected = (main.selected + count - 1) % count;
        }
    }

    /// Open the selected photo in the lightbox, or the envelope.
    pub fn activate_selected(&mut self) {
        let Screen::Main(main) = &self.screen else {
            return;
        };
        if main.overlay.is_some() {
            return;
        }
        if main.selected < self.photos.len() {
            self.open_lightbox(main.selected);
        } else {
            self.open_envelope();
        }
    }

    pub fn open_lightbox(&mut self, index: usize) {
        let count = self.photos.len();
        if count == 0 || index >= count {
            return;
        }
        if let Screen::Main(main) = &mut self.screen {
            tracing::debug!(index, "opening lightbox");
            main.overlay = Some(Overlay::Lightbox(LightboxState::open(index, count)));
            self.scheduler
                .schedule(FOCUS_SEED_DELAY, Action::SeedOverlayFocus);
        }
    }

    /// Start the envelope-opening animation; the modal follows after the
    /// configured delay (immediately with reduced motion).
    pub fn open_envelope(&mut self) {
        let reduced = self.options.reduced_motion;
        if let Screen::Main(main) = &mut self.screen {
            tracing::debug!("envelope activated");
            let delay = if reduced {
                Duration::ZERO
            } else {
                ENVELOPE_OPEN_DELAY
            };
            main.envelope = EnvelopeState::Opening(EffectTimer::new(delay));
            self.scheduler.schedule(delay, Action::OpenMessageModal);
        }
    }

    fn open_message_modal(&mut self) {
        let reduced = self.options.reduced_motion;
        if let Screen::Main(main) = &mut self.screen {
            tracing::debug!("message modal opened");
            main.envelope = EnvelopeState::Opened;
            main.overlay = Some(Overlay::Message(MessageState::open()));
            if !reduced {
                self.confetti = ConfettiBurst::ignite(CONFETTI_COLOR_COUNT);
            }
            self.scheduler
                .schedule(FOCUS_SEED_DELAY, Action::SeedOverlayFocus);
        }
    }

    // ------------------------------------------------------------------
    // Overlay input
    // ------------------------------------------------------------------

    pub fn lightbox_navigate(&mut self, direction: Direction) {
        if let Screen::Main(main) = &mut self.screen
            && let Some(Overlay::Lightbox(lightbox)) = &mut main.overlay
        {
            lightbox.navigate(direction);
        }
    }

    /// Tab / Shift+Tab inside the current overlay.
    pub fn overlay_focus_move(&mut self, forward: bool) {
        if let Screen::Main(main) = &mut self.screen {
            match &mut main.overlay {
                Some(Overlay::Lightbox(lightbox)) => {
                    if forward {
                        lightbox.focus_next();
                    } else {
                        lightbox.focus_prev();
                    }
                }
                Some(Overlay::Message(modal)) => {
                    if forward {
                        modal.focus_next();
                    } else {
                        modal.focus_prev();
                    }
                }
                None => {}
            }
        }
    }

    /// Enter on the overlay's focused control.
    pub fn overlay_activate_focused(&mut self) {
        let Screen::Main(main) = &mut self.screen else {
            return;
        };
        match &mut main.overlay {
            Some(Overlay::Lightbox(lightbox)) => match lightbox.focused() {
                Some(LightboxControl::Close) => self.close_overlay(),
                Some(LightboxControl::Prev) => lightbox.navigate(Direction::Prev),
                Some(LightboxControl::Next) => lightbox.navigate(Direction::Next),
                None => {}
            },
            Some(Overlay::Message(modal)) => {
                if modal.focused() == Some(MessageControl::Close) {
                    self.close_overlay();
                }
            }
            None => {}
        }
    }

    pub fn close_overlay(&mut self) {
        if let Screen::Main(main) = &mut self.screen
            && main.overlay.take().is_some()
        {
            tracing::debug!("overlay closed");
        }
    }

    /// Escape: dismiss the current overlay, if any. Returns whether it was
    /// consumed.
    pub fn escape(&mut self) -> bool {
        if let Screen::Main(main) = &mut self.screen
            && main.overlay.is_some()
        {
            self.close_overlay();
            true
        } else {
            false
        }
    }
}
