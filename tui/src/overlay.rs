//! Overlay rendering: the lightbox, the message modal, and confetti.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use keepsake_engine::{App, ConfettiBurst, LightboxControl, LightboxState, MessageControl, MessageState};

use crate::effects::entry_pop;
use crate::theme::{Glyphs, Palette, styles};

fn popup_block(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.bg_popup))
        .padding(Padding::horizontal(2))
}

fn control_span(
    label: String,
    focused: bool,
    palette: &Palette,
) -> Span<'static> {
    if focused {
        Span::styled(label, styles::control_focused(palette))
    } else {
        Span::styled(label, Style::default().fg(palette.text_muted))
    }
}

pub fn draw_lightbox(
    frame: &mut Frame,
    app: &App,
    lightbox: &LightboxState,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let area = frame.area();
    let [base] = Layout::vertical([Constraint::Length(14)])
        .flex(Flex::Center)
        .areas(area);
    let [base] = Layout::horizontal([Constraint::Percentage(70)])
        .flex(Flex::Center)
        .areas(base);
    let popup = entry_pop(lightbox.entry_progress(), base);

    frame.render_widget(Clear, popup);
    let photo = &app.photos()[lightbox.index()];
    let block = popup_block(photo.label(), palette);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::vertical([
        Constraint::Min(3),    // photo placeholder
        Constraint::Length(1), // counter
        Constraint::Length(1),
        Constraint::Length(1), // controls
    ])
    .split(inner);

    let placeholder = Line::from(vec![
        Span::styled(
            format!("{} ", glyphs.photo),
            Style::default().fg(palette.primary),
        ),
        Span::styled(
            photo.filename.clone(),
            Style::default().fg(palette.text_primary),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(placeholder).alignment(Alignment::Center),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(lightbox.counter())
            .style(Style::default().fg(palette.text_muted))
            .alignment(Alignment::Center),
        chunks[1],
    );

    let focused = lightbox.focused();
    let controls = Line::from(vec![
        control_span(
            format!(" {} prev ", glyphs.arrow_left),
            focused == Some(LightboxControl::Prev),
            palette,
        ),
        Span::raw("  "),
        control_span(
            format!(" {} close ", glyphs.close),
            focused == Some(LightboxControl::Close),
            palette,
        ),
        Span::raw("  "),
        control_span(
            format!(" next {} ", glyphs.arrow_right),
            focused == Some(LightboxControl::Next),
            palette,
        ),
    ]);
    frame.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        chunks[3],
    );
}

pub fn draw_message(
    frame: &mut Frame,
    app: &App,
    modal: &MessageState,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let area = frame.area();
    let height = (app.message().len() as u16 * 3 + 8).min(area.height);
    let [base] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [base] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(base);
    let popup = entry_pop(modal.entry_progress(), base);

    frame.render_widget(Clear, popup);
    let block = popup_block(&format!("{} For you", glyphs.heart), palette);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),    // paragraphs
        Constraint::Length(1), // close control
    ])
    .split(inner);

    let mut lines: Vec<Line> = Vec::new();
    for (i, paragraph) in app.message().iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::styled(
            paragraph.clone(),
            Style::default().fg(palette.text_primary),
        ));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let close = control_span(
        format!(" {} close ", glyphs.close),
        modal.focused() == Some(MessageControl::Close),
        palette,
    );
    frame.render_widget(
        Paragraph::new(Line::from(close)).alignment(Alignment::Center),
        chunks[2],
    );
}

/// Paint falling confetti over whatever is already drawn.
pub fn draw_confetti(frame: &mut Frame, burst: &ConfettiBurst, palette: &Palette, glyphs: &Glyphs) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let colors = palette.confetti();
    let buf = frame.buffer_mut();
    for particle in burst.particles() {
        let Some(progress) = particle.fall_progress() else {
            continue;
        };
        let x = area.x + ((particle.x() * f32::from(area.width)) as u16).min(area.width - 1);
        let y = area.y + ((progress * f32::from(area.height)) as u16).min(area.height - 1);
        let glyph = if particle.is_round() {
            glyphs.confetti_round
        } else {
            glyphs.confetti_square
        };
        let color = colors[particle.color_index() % colors.len()];
        buf[(x, y)]
            .set_symbol(glyph)
            .set_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    }
}
