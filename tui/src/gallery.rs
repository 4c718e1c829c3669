//! Main screen rendering: the photo card grid and the envelope.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use keepsake_engine::{App, EnvelopeState, MainScreen, Photo};

use crate::theme::{Glyphs, Palette, styles};

const CARD_WIDTH: u16 = 18;
const CARD_HEIGHT: u16 = 7;
const CARD_GAP: u16 = 2;

pub fn draw_gallery(
    frame: &mut Frame,
    app: &App,
    main: &MainScreen,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Length(2), // title
        Constraint::Min(CARD_HEIGHT),
        Constraint::Length(1), // key hints
    ])
    .split(area);

    let title = Line::from(vec![
        Span::styled("Our little gallery ", styles::title(palette)),
        Span::styled(glyphs.heart, Style::default().fg(palette.accent)),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[0]);

    draw_cards(frame, app, main, chunks[1], palette, glyphs);

    frame.render_widget(
        Paragraph::new("arrows: choose  |  enter: open  |  q: quit")
            .style(styles::key_hint(palette))
            .alignment(Alignment::Center),
        chunks[2],
    );
}

fn draw_cards(
    frame: &mut Frame,
    app: &App,
    main: &MainScreen,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let count = app.photos().len() + 1;
    let per_row = usize::from(
        ((area.width + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).clamp(1, count as u16),
    );
    let rows = count.div_ceil(per_row);

    let grid_height = rows as u16 * CARD_HEIGHT + rows.saturating_sub(1) as u16;
    let [grid] = Layout::vertical([Constraint::Length(grid_height)])
        .flex(Flex::Center)
        .areas(area);

    for row in 0..rows {
        let row_start = row * per_row;
        let row_len = per_row.min(count - row_start);
        let row_width = row_len as u16 * CARD_WIDTH + (row_len as u16 - 1) * CARD_GAP;
        let y = grid.y + row as u16 * (CARD_HEIGHT + 1);
        let [row_area] = Layout::horizontal([Constraint::Length(row_width)])
            .flex(Flex::Center)
            .areas(Rect::new(grid.x, y, grid.width, CARD_HEIGHT));

        for col in 0..row_len {
            let index = row_start + col;
            let x = row_area.x + col as u16 * (CARD_WIDTH + CARD_GAP);
            let cell = Rect::new(x, row_area.y, CARD_WIDTH, CARD_HEIGHT);
            if index < app.photos().len() {
                draw_photo_card(
                    frame,
                    &app.photos()[index],
                    cell,
                    index == main.selected(),
                    palette,
                    glyphs,
                );
            } else {
                draw_envelope_card(
                    frame,
                    main.envelope(),
                    cell,
                    index == main.selected(),
                    palette,
                    glyphs,
                );
            }
        }
    }
}

fn card_block(selected: bool, palette: &Palette) -> Block<'static> {
    let border = if selected {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.bg_border)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(Style::default().bg(palette.bg_panel))
}

fn draw_photo_card(
    frame: &mut Frame,
    photo: &Photo,
    cell: Rect,
    selected: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = card_block(selected, palette);
    let inner = block.inner(cell);
    frame.render_widget(block, cell);

    let marker = if selected { glyphs.selected } else { " " };
    let label = truncate(photo.label(), usize::from(inner.width).saturating_sub(2));
    let lines = vec![
        Line::default(),
        Line::styled(
            glyphs.photo.to_string(),
            Style::default().fg(palette.primary),
        ),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
            Span::styled(label, Style::default().fg(palette.text_primary)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

fn draw_envelope_card(
    frame: &mut Frame,
    envelope: &EnvelopeState,
    cell: Rect,
    selected: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = card_block(selected, palette);
    let inner = block.inner(cell);
    frame.render_widget(block, cell);

    let glyph = if envelope.is_open() {
        glyphs.envelope_open
    } else {
        glyphs.envelope_closed
    };
    let marker = if selected { glyphs.selected } else { " " };
    let lines = vec![
        Line::default(),
        Line::styled(glyph.to_string(), Style::default().fg(palette.gold)),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{marker} "), Style::default().fg(palette.accent)),
            Span::styled("A letter", Style::default().fg(palette.text_primary)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for c in text.chars() {
        if out.width() + 1 >= max_width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}
