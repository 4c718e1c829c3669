//! Input handling for the Keepsake TUI.
//!
//! A blocking reader thread pumps crossterm events into a bounded channel;
//! `handle_events` drains the channel once per frame and translates keys
//! into calls on the app.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;

use keepsake_engine::{App, Overlay, Screen};
use keepsake_types::Direction;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the reader thread unblocks if it is
        // backpressured on a send.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Where a key event should be routed.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Route {
    Gate,
    Gallery,
    Lightbox,
    Message,
}

fn route(app: &App) -> Route {
    match app.screen() {
        Screen::Gate(_) => Route::Gate,
        Screen::Main(main) => match main.overlay() {
            None => Route::Gallery,
            Some(Overlay::Lightbox(_)) => Route::Lightbox,
            Some(Overlay::Message(_)) => Route::Message,
        },
    }
}

/// Drain pending input and apply it. Returns `true` when the user quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        processed += 1;

        match ev {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                if apply_key(app, key) {
                    return Ok(true);
                }
            }
            Event::Paste(text) => {
                if route(app) == Route::Gate {
                    app.gate_paste(&text);
                }
            }
            _ => {}
        }
    }
    Ok(false)
}

/// Apply a single key press. Returns `true` when the app should exit.
fn apply_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        tracing::debug!("ctrl-c, quitting");
        return true;
    }

    match route(app) {
        Route::Gate => match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => app.gate_enter_digit(c),
            KeyCode::Backspace => app.gate_backspace(),
            KeyCode::Left => app.gate_move_focus(Direction::Prev),
            KeyCode::Right => app.gate_move_focus(Direction::Next),
            KeyCode::Esc | KeyCode::Char('q') => return true,
            _ => {}
        },
        Route::Gallery => match key.code {
            KeyCode::Left | KeyCode::Char('h') => app.select_prev_card(),
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => app.select_next_card(),
            KeyCode::BackTab => app.select_prev_card(),
            KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected(),
            KeyCode::Esc | KeyCode::Char('q') => return true,
            _ => {}
        },
        Route::Lightbox => match key.code {
            KeyCode::Left | KeyCode::Char('h') => app.lightbox_navigate(Direction::Prev),
            KeyCode::Right | KeyCode::Char('l') => app.lightbox_navigate(Direction::Next),
            KeyCode::Tab => app.overlay_focus_move(true),
            KeyCode::BackTab => app.overlay_focus_move(false),
            KeyCode::Enter | KeyCode::Char(' ') => app.overlay_activate_focused(),
            KeyCode::Esc => {
                app.escape();
            }
            _ => {}
        },
        Route::Message => match key.code {
            KeyCode::Tab => app.overlay_focus_move(true),
            KeyCode::BackTab => app.overlay_focus_move(false),
            KeyCode::Enter | KeyCode::Char(' ') => app.overlay_activate_focused(),
            KeyCode::Esc => {
                app.escape();
            }
            _ => {}
        },
    }
    false
}

#[cfg(test)]
mod tests {
    use super::apply_key;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use keepsake_engine::{App, KeepsakeConfig, Overlay, Screen};
    use std::time::Duration;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::from_config(KeepsakeConfig::demo()).unwrap()
    }

    fn unlocked() -> App {
        let mut app = app();
        for c in "0908".chars() {
            apply_key(&mut app, press(KeyCode::Char(c)));
        }
        app.tick(Duration::from_millis(300));
        app
    }

    #[test]
    fn digits_reach_the_gate_and_unlock() {
        let app = unlocked();
        assert!(matches!(app.screen(), Screen::Main(_)));
    }

    #[test]
    fn non_digit_chars_are_ignored_at_the_gate() {
        let mut app = app();
        apply_key(&mut app, press(KeyCode::Char('x')));
        let Screen::Gate(gate) = app.screen() else {
            panic!("expected gate")
        };
        assert!(!gate.gate().slots()[0].is_filled());
    }

    #[test]
    fn ctrl_c_quits_from_any_screen() {
        let mut app = app();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(apply_key(&mut app, ctrl_c));
    }

    #[test]
    fn enter_opens_the_selected_photo() {
        let mut app = unlocked();
        apply_key(&mut app, press(KeyCode::Enter));
        let Screen::Main(main) = app.screen() else {
            panic!("expected main")
        };
        assert!(matches!(main.overlay(), Some(Overlay::Lightbox(_))));
    }

    #[test]
    fn escape_dismisses_the_lightbox_without_quitting() {
        let mut app = unlocked();
        apply_key(&mut app, press(KeyCode::Enter));
        assert!(!apply_key(&mut app, press(KeyCode::Esc)));
        let Screen::Main(main) = app.screen() else {
            panic!("expected main")
        };
        assert!(main.overlay().is_none());
    }

    #[test]
    fn arrows_navigate_inside_the_lightbox() {
        let mut app = unlocked();
        apply_key(&mut app, press(KeyCode::Enter));
        apply_key(&mut app, press(KeyCode::Left));
        let Screen::Main(main) = app.screen() else {
            panic!("expected main")
        };
        let Some(Overlay::Lightbox(lightbox)) = main.overlay() else {
            panic!("expected lightbox")
        };
        assert_eq!(lightbox.counter(), "4 / 4");
    }
}
