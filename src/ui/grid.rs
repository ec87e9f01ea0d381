//! Responsive card grid geometry.

use ratatui::layout::Rect;

/// Viewport width (cells) at which the grid switches to two columns.
pub const SM_BREAKPOINT: u16 = 80;

/// Viewport width (cells) at which the grid switches to three columns.
pub const LG_BREAKPOINT: u16 = 128;

/// Widest the grid may grow before it is centred.
pub const MAX_GRID_WIDTH: u16 = 144;

/// Side padding of the grid section.
pub const PADDING_X: u16 = 2;

pub const GAP_X: u16 = 4;
pub const GAP_Y: u16 = 2;
pub const CARD_HEIGHT: u16 = 14;

/// Number of grid columns for a viewport width.
pub fn columns_for_width(viewport_width: u16) -> u16 {
    if viewport_width < SM_BREAKPOINT {
        1
    } else if viewport_width < LG_BREAKPOINT {
        2
    } else {
        3
    }
}

/// Number of card rows needed for `count` cards.
pub fn row_count(count: usize, columns: u16) -> u16 {
    let columns = columns.max(1) as usize;
    count.div_ceil(columns) as u16
}

/// Number of whole card rows a section of `height` rows can show; at least one.
pub fn visible_rows(height: u16) -> u16 {
    (height.saturating_add(GAP_Y) / (CARD_HEIGHT + GAP_Y)).max(1)
}

/// Centred, padded and width-capped area the cards are laid out in.
pub fn grid_area(section: Rect) -> Rect {
    let padded = section.width.saturating_sub(PADDING_X * 2);
    let width = padded.min(MAX_GRID_WIDTH);
    let x = section.x + (section.width - width) / 2;
    Rect::new(x, section.y, width, section.height)
}

/// Place `count` cards into `section`, skipping the first `scroll` card rows.
///
/// Returns `(index, rect)` pairs in collection order for every card whose
/// top edge lies inside the section. Cards that overflow the bottom edge
/// are clipped to it.
pub fn layout_cards(
    section: Rect,
    viewport_width: u16,
    count: usize,
    scroll: u16,
) -> Vec<(usize, Rect)> {
    let area = grid_area(section);
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let columns = columns_for_width(viewport_width);
    let gaps = GAP_X * (columns - 1);
    let card_width = area.width.saturating_sub(gaps) / columns;
    if card_width == 0 {
        return Vec::new();
    }
    // Spread the remainder so the grid stays centred.
    let used = card_width * columns + gaps;
    let left = area.x + (area.width - used) / 2;

    let first = scroll as usize * columns as usize;
    (first..count)
        .map_while(|index| {
            let offset = index - first;
            let row = (offset / columns as usize) as u16;
            let col = (offset % columns as usize) as u16;
            let top = row
                .checked_mul(CARD_HEIGHT + GAP_Y)
                .and_then(|dy| area.y.checked_add(dy))
                .filter(|&top| top < area.bottom())?;
            let height = CARD_HEIGHT.min(area.bottom() - top);
            let x = left + col * (card_width + GAP_X);
            Some((index, Rect::new(x, top, card_width, height)))
        })
        .collect()
}

/// Grow a card rect by one cell on each side, staying inside `bounds`.
pub fn scaled(rect: Rect, bounds: Rect) -> Rect {
    let x = rect.x.saturating_sub(1);
    let y = rect.y.saturating_sub(1);
    let grown = Rect::new(
        x,
        y,
        rect.right().saturating_add(1) - x,
        rect.bottom().saturating_add(1) - y,
    );
    grown.intersection(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for_width(0), 1);
        assert_eq!(columns_for_width(79), 1);
        assert_eq!(columns_for_width(80), 2);
        assert_eq!(columns_for_width(127), 2);
        assert_eq!(columns_for_width(128), 3);
        assert_eq!(columns_for_width(400), 3);
    }

    #[test]
    fn test_row_count() {
        assert_eq!(row_count(0, 3), 0);
        assert_eq!(row_count(3, 3), 1);
        assert_eq!(row_count(4, 3), 2);
        assert_eq!(row_count(5, 1), 5);
    }

    #[test]
    fn test_visible_rows() {
        assert_eq!(visible_rows(0), 1);
        assert_eq!(visible_rows(CARD_HEIGHT), 1);
        assert_eq!(visible_rows(CARD_HEIGHT * 2 + GAP_Y - 1), 1);
        assert_eq!(visible_rows(CARD_HEIGHT * 2 + GAP_Y), 2);
        assert_eq!(visible_rows(53), 3);
    }

    #[test]
    fn test_grid_area_is_capped_and_centred() {
        let area = grid_area(Rect::new(0, 5, 200, 40));
        assert_eq!(area.width, MAX_GRID_WIDTH);
        assert_eq!(area.x, 28);
        assert_eq!(area.y, 5);

        let narrow = grid_area(Rect::new(0, 0, 60, 10));
        assert_eq!(narrow.width, 56);
        assert_eq!(narrow.x, 2);
    }

    #[test]
    fn test_three_columns_one_row() {
        let section = Rect::new(0, 0, 140, 40);
        let cards = layout_cards(section, 140, 3, 0);

        assert_eq!(cards.len(), 3);
        let indices: Vec<usize> = cards.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(cards.iter().all(|(_, r)| r.y == 0 && r.height == CARD_HEIGHT));
        assert!(cards[0].1.x < cards[1].1.x && cards[1].1.x < cards[2].1.x);
        assert_eq!(cards[1].1.x - cards[0].1.right(), GAP_X);
        assert_eq!(cards[2].1.x - cards[1].1.right(), GAP_X);
    }

    #[test]
    fn test_single_column_stacks_with_gap() {
        let section = Rect::new(0, 0, 60, 60);
        let cards = layout_cards(section, 60, 3, 0);

        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|(_, r)| r.x == cards[0].1.x));
        assert_eq!(cards[1].1.y - cards[0].1.bottom(), GAP_Y);
        assert_eq!(cards[2].1.y - cards[1].1.bottom(), GAP_Y);
    }

    #[test]
    fn test_two_columns_wrap() {
        let section = Rect::new(0, 0, 100, 60);
        let cards = layout_cards(section, 100, 3, 0);

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].1.y, cards[1].1.y);
        assert_eq!(cards[2].1.x, cards[0].1.x);
        assert_eq!(cards[2].1.y, CARD_HEIGHT + GAP_Y);
    }

    #[test]
    fn test_empty_collection() {
        assert!(layout_cards(Rect::new(0, 0, 120, 40), 120, 0, 0).is_empty());
    }

    #[test]
    fn test_overflow_is_clipped() {
        let section = Rect::new(0, 0, 60, 20);
        let cards = layout_cards(section, 60, 3, 0);

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].1.height, CARD_HEIGHT);
        assert_eq!(cards[1].1.height, 20 - (CARD_HEIGHT + GAP_Y));
    }

    #[test]
    fn test_scroll_skips_rows() {
        let section = Rect::new(0, 0, 60, 40);
        let cards = layout_cards(section, 60, 3, 1);

        assert_eq!(cards[0].0, 1);
        assert_eq!(cards[0].1.y, 0);
    }

    #[test]
    fn test_scaled_stays_in_bounds() {
        let bounds = Rect::new(0, 0, 50, 20);
        assert_eq!(scaled(Rect::new(5, 5, 10, 5), bounds), Rect::new(4, 4, 12, 7));
        assert_eq!(scaled(Rect::new(0, 0, 10, 5), bounds), Rect::new(0, 0, 11, 6));
    }
}
