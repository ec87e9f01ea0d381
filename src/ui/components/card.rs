//! Playlist card component.

use std::borrow::Cow;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use ratatui_image::StatefulImage;
use unicode_width::UnicodeWidthChar;

use super::cover::CoverSlot;
use crate::gallery::PlaylistRecord;
use crate::theme::{mix, shade, Palette};
use crate::ui::transition::HoverFx;

/// Rows reserved for the caption: gradient lead-in, title, tag, padding.
pub const CAPTION_HEIGHT: u16 = 4;

/// Darkness of the caption's bottom row at rest and on hover.
const OVERLAY_REST: f32 = 0.7;
const OVERLAY_HOVER: f32 = 0.4;

/// Left inset of caption text.
const CAPTION_INSET: u16 = 2;

/// What one card shows, borrowed from its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card<'a> {
    pub title: &'a str,
    pub tag: &'a str,
    /// Image source
    pub src: &'a str,
    /// Text shown in place of an image that failed to load
    pub alt: &'a str,
}

impl<'a> From<&'a PlaylistRecord> for Card<'a> {
    fn from(record: &'a PlaylistRecord) -> Self {
        Self {
            title: &record.title,
            tag: &record.tag,
            src: &record.cover,
            alt: &record.title,
        }
    }
}

/// Bottom-row overlay alpha for a hover fade value.
pub fn overlay_alpha(fade: f32) -> f32 {
    OVERLAY_REST + (OVERLAY_HOVER - OVERLAY_REST) * fade.clamp(0.0, 1.0)
}

/// Render a card into `area`.
pub fn render_card(
    frame: &mut Frame,
    area: Rect,
    card: &Card,
    cover: &mut CoverSlot,
    fx: &HoverFx,
    palette: &Palette,
) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let scale = fx.scale.value();
    let fade = fx.fade.value();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(mix(palette.border, palette.accent, scale)))
        .style(Style::default().bg(palette.card));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let caption_height = CAPTION_HEIGHT.min(inner.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(caption_height)])
        .split(inner);

    render_cover(frame, chunks[0], card, cover, fade, palette);
    render_caption(frame, chunks[1], card, fade, palette);
}

fn render_cover(
    frame: &mut Frame,
    area: Rect,
    card: &Card,
    cover: &mut CoverSlot,
    fade: f32,
    palette: &Palette,
) {
    if area.height == 0 {
        return;
    }

    match cover {
        CoverSlot::Ready(art) => {
            frame.render_stateful_widget(StatefulImage::default(), area, art.protocol(fade));
        }
        CoverSlot::Pending => {
            let y = area.y + area.height / 2;
            let placeholder = Paragraph::new("♪")
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.text_faint));
            frame.render_widget(placeholder, Rect::new(area.x, y, area.width, 1));
        }
        CoverSlot::Broken => {
            let line = format!("✕ {}", card.alt);
            let broken = Paragraph::new(truncate(&line, area.width.saturating_sub(2)).into_owned())
                .style(Style::default().fg(palette.text_faint));
            frame.render_widget(broken, Rect::new(area.x + 1, area.y, area.width - 1, 1));
        }
        CoverSlot::Disabled => {}
    }
}

fn render_caption(frame: &mut Frame, area: Rect, card: &Card, fade: f32, palette: &Palette) {
    if area.height == 0 {
        return;
    }

    // Gradient darkens toward the bottom edge.
    let bottom = overlay_alpha(fade);
    for row in 0..area.height {
        let alpha = bottom * f32::from(row + 1) / f32::from(area.height);
        let rect = Rect::new(area.x, area.y + row, area.width, 1);
        frame.render_widget(
            Block::default().style(Style::default().bg(shade(palette.card, alpha))),
            rect,
        );
    }

    let text_width = area.width.saturating_sub(CAPTION_INSET * 2);
    // Text sits on the bottom rows, above one padding row when there is room.
    let padding = u16::from(area.height >= CAPTION_HEIGHT);
    let tag_row = area.bottom() - 1 - padding;
    let title_row = tag_row.saturating_sub(1).max(area.y);

    let title = Paragraph::new(Line::from(truncate(card.title, text_width).into_owned())).style(
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    );
    let tag = Paragraph::new(Line::from(truncate(card.tag, text_width).into_owned()))
        .style(Style::default().fg(palette.text_soft));

    let x = area.x + CAPTION_INSET.min(area.width);
    frame.render_widget(title, Rect::new(x, title_row, text_width, 1));
    if tag_row != title_row {
        frame.render_widget(tag, Rect::new(x, tag_row, text_width, 1));
    }
}

/// Cut `text` to at most `width` display cells, marking the cut with `…`.
pub fn truncate(text: &str, width: u16) -> Cow<'_, str> {
    let width = width as usize;
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return Cow::Borrowed(text);
    }
    if width == 0 {
        return Cow::Borrowed("");
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    fn record(cover: &str) -> PlaylistRecord {
        PlaylistRecord::new(1, "Night Vibe", "calm night songs", cover)
    }

    #[test]
    fn test_card_from_record() {
        let record = record("https://example.com/a.jpg");
        let card = Card::from(&record);
        assert_eq!(card.title, "Night Vibe");
        assert_eq!(card.tag, "calm night songs");
        assert_eq!(card.src, "https://example.com/a.jpg");
        assert_eq!(card.alt, "Night Vibe");
    }

    #[test]
    fn test_overlay_lightens_on_hover() {
        assert_eq!(overlay_alpha(0.0), 0.7);
        assert!((overlay_alpha(1.0) - 0.4).abs() < f32::EPSILON);
        assert!(overlay_alpha(0.5) < overlay_alpha(0.0));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly", 7), "exactly");
        assert_eq!(truncate("truncated text", 6), "trunc…");
        assert_eq!(truncate("차분한 밤", 4), "차…");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn test_broken_cover_still_shows_caption() {
        let record = record("");
        let card = Card::from(&record);
        let mut cover = CoverSlot::Broken;
        let fx = HoverFx::new(true);

        let mut terminal = Terminal::new(TestBackend::new(40, 14)).unwrap();
        terminal
            .draw(|frame| {
                render_card(frame, frame.area(), &card, &mut cover, &fx, &Palette::VIBE)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..14).map(|y| row_text(buffer, y)).collect();
        assert!(rows[1].contains("✕ Night Vibe"));
        // Caption sits on the bottom rows, above the padding row and border.
        assert!(rows[10].contains("Night Vibe"));
        assert!(rows[11].contains("calm night songs"));
    }

    #[test]
    fn test_pending_cover_placeholder() {
        let record = record("https://example.com/a.jpg");
        let card = Card::from(&record);
        let mut cover = CoverSlot::Pending;
        let fx = HoverFx::new(true);

        let mut terminal = Terminal::new(TestBackend::new(30, 14)).unwrap();
        terminal
            .draw(|frame| {
                render_card(frame, frame.area(), &card, &mut cover, &fx, &Palette::VIBE)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!((0..14).any(|y| row_text(buffer, y).contains('♪')));
    }

    #[test]
    fn test_short_caption_keeps_title_and_tag() {
        let record = record("");
        let card = Card::from(&record);
        let mut cover = CoverSlot::Broken;
        let fx = HoverFx::new(true);

        // Two inner rows leave no room for the cover, only the caption.
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal
            .draw(|frame| {
                render_card(frame, frame.area(), &card, &mut cover, &fx, &Palette::VIBE)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert!(row_text(buffer, 1).contains("Night Vibe"));
        assert!(row_text(buffer, 2).contains("calm night songs"));
    }

    #[test]
    fn test_tiny_area_is_skipped() {
        let record = record("");
        let card = Card::from(&record);
        let mut cover = CoverSlot::Broken;
        let fx = HoverFx::new(true);

        let mut terminal = Terminal::new(TestBackend::new(2, 2)).unwrap();
        terminal
            .draw(|frame| {
                render_card(frame, frame.area(), &card, &mut cover, &fx, &Palette::VIBE)
            })
            .unwrap();
    }
}
