//! Main UI layout and rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::{mix, Palette};

pub mod components;
pub mod grid;
pub mod transition;

pub use components::*;

pub const HEADER_TITLE: &str = "🎧 YourVibe";
pub const HEADER_SUBTITLE: &str = "나만의 감성 플레이리스트 공간";
pub const FOOTER_TEXT: &str = "© 2025 YourVibe. Feel your mood. 💫";

pub const HEADER_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 3;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let palette = app.palette;

    render_backdrop(frame, area, &palette);

    // Main layout: [header] [grid] [footer]
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    render_header(frame, main_chunks[0], &palette);
    render_grid(frame, main_chunks[1], app);
    render_footer(frame, main_chunks[2], &palette);
}

/// Fill the screen with a vertical background-to-black gradient.
fn render_backdrop(frame: &mut Frame, area: Rect, palette: &Palette) {
    let height = area.height.max(1);
    for row in 0..area.height {
        let t = f32::from(row) / f32::from(height);
        let bg = mix(palette.background, Color::Rgb(0, 0, 0), t);
        frame.render_widget(
            Block::default().style(Style::default().bg(bg).fg(palette.text)),
            Rect::new(area.x, area.y + row, area.width, 1),
        );
    }
}

fn render_header(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::default(),
        Line::styled(
            HEADER_TITLE,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(HEADER_SUBTITLE, Style::default().fg(palette.text_muted)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_footer(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::default(),
        Line::styled(FOOTER_TEXT, Style::default().fg(palette.text_faint)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Lay out and draw one card per record.
fn render_grid(frame: &mut Frame, area: Rect, app: &mut App) {
    app.layout.grid = area;
    app.layout.cards.clear();

    let viewport_width = frame.area().width;
    let mut placed = grid::layout_cards(area, viewport_width, app.gallery.len(), app.scroll);

    // Raised cards draw last so they overlap their neighbours' gaps.
    placed.sort_by(|a, b| {
        let sa = app.hover[a.0].scale.value();
        let sb = app.hover[b.0].scale.value();
        sa.total_cmp(&sb)
    });

    for (index, rect) in placed {
        let fx = app.hover[index];
        let rect = if fx.scale.value() >= 0.5 {
            grid::scaled(rect, area)
        } else {
            rect
        };

        let card = Card::from(&app.gallery.records()[index]);
        render_card(frame, rect, &card, &mut app.covers[index], &fx, &app.palette);
        app.layout.cards.push((index, rect));
    }
}
