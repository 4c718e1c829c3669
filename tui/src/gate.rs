//! PIN gate screen rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use keepsake_engine::{App, GateScreen, GateStatus};
use keepsake_types::PIN_LEN;

use crate::effects::rejection_shake;
use crate::theme::{Glyphs, Palette, styles};

const SLOT_WIDTH: u16 = 5;
const SLOT_GAP: u16 = 2;

pub fn draw_gate(
    frame: &mut Frame,
    app: &App,
    gate: &GateScreen,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let area = frame.area();
    let [panel] = Layout::vertical([Constraint::Length(11)])
        .flex(Flex::Center)
        .areas(area);
    let [panel] = Layout::horizontal([Constraint::Length(44)])
        .flex(Flex::Center)
        .areas(panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(1), // prompt
            Constraint::Length(1),
            Constraint::Length(3), // slots
            Constraint::Length(1), // status
            Constraint::Length(1), // key hints
        ])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(format!("{} ", glyphs.heart), Style::default().fg(palette.accent)),
        Span::styled("For You", styles::title(palette)),
        Span::styled(format!(" {}", glyphs.heart), Style::default().fg(palette.accent)),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[0]);

    frame.render_widget(
        Paragraph::new("Enter the PIN to open your keepsake")
            .style(Style::default().fg(palette.text_muted))
            .alignment(Alignment::Center),
        chunks[1],
    );

    draw_slots(frame, gate, chunks[3], palette, glyphs);
    draw_status(frame, app, gate, chunks[4], palette);

    frame.render_widget(
        Paragraph::new("type digits  |  backspace: erase  |  esc: quit")
            .style(styles::key_hint(palette))
            .alignment(Alignment::Center),
        chunks[5],
    );
}

fn draw_slots(frame: &mut Frame, gate: &GateScreen, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let row_width = PIN_LEN as u16 * SLOT_WIDTH + (PIN_LEN as u16 - 1) * SLOT_GAP;
    let [row] = Layout::horizontal([Constraint::Length(row_width)])
        .flex(Flex::Center)
        .areas(area);
    let row = match gate.rejection_progress() {
        Some(progress) => rejection_shake(progress, row, area),
        None => row,
    };

    let rejected = gate.status() == GateStatus::Rejected;
    for (index, slot) in gate.gate().slots().iter().enumerate() {
        let x = row.x + index as u16 * (SLOT_WIDTH + SLOT_GAP);
        let cell = Rect::new(x, row.y, SLOT_WIDTH, row.height.min(3));

        let style = if rejected {
            styles::slot_error(palette)
        } else if index == gate.focused_slot() {
            styles::slot_focused(palette)
        } else {
            styles::slot_idle(palette)
        };

        let text = slot
            .digit()
            .map_or_else(|| glyphs.slot_empty.to_string(), |d| d.to_string());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style);
        let inner = block.inner(cell);
        frame.render_widget(block, cell);
        frame.render_widget(
            Paragraph::new(text).style(style).alignment(Alignment::Center),
            inner,
        );
    }
}

fn draw_status(frame: &mut Frame, app: &App, gate: &GateScreen, area: Rect, palette: &Palette) {
    let line = match gate.status() {
        GateStatus::Idle => Line::default(),
        GateStatus::Rejected => Line::styled(
            format!("Incorrect PIN (attempt {})", gate.gate().attempts()),
            Style::default().fg(palette.error),
        ),
        GateStatus::Hint => Line::styled(app.hint().to_string(), Style::default().fg(palette.gold)),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
