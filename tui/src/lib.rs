//! TUI rendering for Keepsake using ratatui.

mod effects;
mod gallery;
mod gate;
mod input;
mod overlay;
mod theme;

pub use effects::{entry_pop, rejection_shake};
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{Frame, style::Style, widgets::Block};

use keepsake_engine::{App, Overlay, Screen};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.options();
    let palette = palette(app.theme(), options);
    let glyphs = glyphs(options);

    // Clear with background color.
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    match app.screen() {
        Screen::Gate(gate_screen) => {
            gate::draw_gate(frame, app, gate_screen, &palette, &glyphs);
        }
        Screen::Main(main) => {
            gallery::draw_gallery(frame, app, main, &palette, &glyphs);
            match main.overlay() {
                Some(Overlay::Lightbox(lightbox)) => {
                    overlay::draw_lightbox(frame, app, lightbox, &palette, &glyphs);
                }
                Some(Overlay::Message(modal)) => {
                    overlay::draw_message(frame, app, modal, &palette, &glyphs);
                }
                None => {}
            }
        }
    }

    if !app.confetti().is_empty() {
        overlay::draw_confetti(frame, app.confetti(), &palette, &glyphs);
    }
}
