//! Shared test utilities and fixtures
//!
//! Builds apps from inline TOML configs so tests exercise the same config
//! pipeline the binary uses.

#![allow(dead_code)]

use std::io::Write;
use std::time::Duration;

use keepsake_engine::{App, KeepsakeConfig, Screen};

pub const TEST_PIN: &str = "2741";

pub const TEST_CONFIG: &str = r##"
message = "Hello you.\n\nStill my favorite person."

[gate]
pin = "2741"
max_attempts = 3
hint = "the bus number"

[[photos]]
filename = "beach.jpg"
alt = "that windy beach"

[[photos]]
filename = "cake.jpg"

[[photos]]
filename = "rooftop.jpg"
alt = "rooftop sunset"
"##;

pub fn app_from(toml_text: &str) -> App {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(toml_text.as_bytes()).unwrap();
    let config = KeepsakeConfig::load_file(file.path()).unwrap();
    App::from_config(config).unwrap()
}

pub fn gated_app() -> App {
    app_from(TEST_CONFIG)
}

/// Paste the right PIN and ride out the reveal delay.
pub fn unlock(app: &mut App) {
    app.gate_paste(TEST_PIN);
    app.tick(Duration::from_millis(300));
    assert!(
        matches!(app.screen(), Screen::Main(_)),
        "app did not reach the main screen"
    );
}

pub fn unlocked_app() -> App {
    let mut app = gated_app();
    unlock(&mut app);
    app
}

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}
