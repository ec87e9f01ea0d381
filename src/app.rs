//! Main application state and logic.

use std::time::{Duration, Instant};

use color_eyre::Result;
use ratatui::layout::{Position, Rect};
use ratatui_image::picker::Picker;
use tokio::sync::mpsc;

use crate::action::Action;
use crate::config::Config;
use crate::covers::CoverFetcher;
use crate::gallery::Gallery;
use crate::theme::{Palette, STYLE};
use crate::ui::grid;
use crate::ui::transition::HoverFx;
use crate::ui::{Card, CoverArt, CoverSlot, FOOTER_HEIGHT, HEADER_HEIGHT};

/// UI layout areas for mouse hit-testing, refreshed on every draw.
#[derive(Debug, Default, Clone)]
pub struct UiLayout {
    /// Grid section area
    pub grid: Rect,
    /// Drawn card rects, paired with their index in the gallery
    pub cards: Vec<(usize, Rect)>,
}

/// Main application state.
pub struct App {
    /// Whether the app should quit
    pub should_quit: bool,

    /// Configuration
    pub config: Config,

    /// Colour tokens
    pub palette: Palette,

    /// The playlists on display
    pub gallery: Gallery,

    /// Cover slot per record, index-aligned with the gallery
    pub covers: Vec<CoverSlot>,

    /// Hover effect per record, index-aligned with the gallery
    pub hover: Vec<HoverFx>,

    /// Card under the pointer
    pub hovered: Option<usize>,

    /// First visible card row
    pub scroll: u16,

    /// Image picker for terminal graphics
    pub picker: Option<Picker>,

    /// Action sender for async operations
    pub action_tx: mpsc::UnboundedSender<Action>,

    /// Terminal width for the column breakpoints
    pub terminal_width: u16,

    /// Terminal height for the scroll limit
    pub terminal_height: u16,

    /// UI layout areas for mouse detection
    pub layout: UiLayout,

    last_tick: Instant,
}

impl App {
    /// Create a new application instance.
    pub fn new(
        config: Config,
        gallery: Gallery,
        picker: Option<Picker>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));

        let covers = gallery
            .records()
            .iter()
            .map(|record| {
                if !config.ui.show_covers {
                    CoverSlot::Disabled
                } else if record.cover.trim().is_empty() {
                    CoverSlot::Broken
                } else if picker.is_none() {
                    CoverSlot::Disabled
                } else {
                    CoverSlot::Pending
                }
            })
            .collect();
        let hover = vec![HoverFx::new(config.ui.animations); gallery.len()];

        Self {
            should_quit: false,
            config,
            palette: STYLE.palette,
            gallery,
            covers,
            hover,
            hovered: None,
            scroll: 0,
            picker,
            action_tx,
            terminal_width: width,
            terminal_height: height,
            layout: UiLayout::default(),
            last_tick: Instant::now(),
        }
    }

    /// Start loading every pending cover in the background.
    pub fn init(&mut self) -> Result<()> {
        let pending = self.pending_covers();

        tracing::info!(
            "Showing {} playlists, fetching {} covers ({} without a source)",
            self.gallery.len(),
            pending.len(),
            self.covers.iter().filter(|slot| slot.is_broken()).count()
        );
        tracing::debug!("Palette tokens used by {:?}", STYLE.content);

        if pending.is_empty() {
            return Ok(());
        }

        let fetcher = CoverFetcher::new(self.config.cover_timeout())?;
        for (id, url) in pending {
            fetcher.spawn(id, url, self.action_tx.clone());
        }

        Ok(())
    }

    /// Playlist id and image source of every cover still to fetch.
    pub fn pending_covers(&self) -> Vec<(u32, String)> {
        self.gallery
            .records()
            .iter()
            .zip(&self.covers)
            .filter(|(_, slot)| slot.is_pending())
            .map(|(record, _)| (record.id, Card::from(record).src.to_string()))
            .collect()
    }

    /// Handle an action and update state.
    pub fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }

            Action::Tick => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_tick);
                self.last_tick = now;
                self.advance(dt);
            }

            Action::Resize(width, height) => {
                self.terminal_width = width;
                self.terminal_height = height;
                self.scroll = self.scroll.min(self.max_scroll());
            }

            Action::MouseMove(x, y) => {
                let target = self.card_at(x, y);
                self.set_hovered(target);
            }

            Action::MouseScroll(delta) => {
                let scroll = if delta > 0 {
                    self.scroll.saturating_add(1)
                } else {
                    self.scroll.saturating_sub(1)
                };
                let scroll = scroll.min(self.max_scroll());
                if scroll != self.scroll {
                    self.scroll = scroll;
                    // Cards moved under the pointer; wait for the next move.
                    self.set_hovered(None);
                }
            }

            Action::CoverLoaded(id, bytes) => {
                self.apply_cover(id, &bytes);
            }

            Action::CoverFailed(id, reason) => {
                if let Some(index) = self.gallery.position(id) {
                    tracing::debug!("Cover for playlist {} is broken: {}", id, reason);
                    self.covers[index] = CoverSlot::Broken;
                }
            }

            Action::None => {}
        }

        Ok(())
    }

    /// Step every hover transition forward by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        for fx in self.hover.iter_mut().filter(|fx| !fx.is_settled()) {
            fx.advance(dt);
        }
    }

    /// Index of the drawn card containing a screen position.
    pub fn card_at(&self, x: u16, y: u16) -> Option<usize> {
        let position = Position::new(x, y);
        if !self.layout.grid.contains(position) {
            return None;
        }

        // Last drawn wins, matching what is on top.
        self.layout
            .cards
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(position))
            .map(|(index, _)| *index)
    }

    fn set_hovered(&mut self, target: Option<usize>) {
        if target == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered {
            self.hover[previous].set_hovered(false);
        }
        if let Some(next) = target {
            self.hover[next].set_hovered(true);
            tracing::debug!("Hovering playlist {}", self.gallery.records()[next].id);
        }
        self.hovered = target;
    }

    fn max_scroll(&self) -> u16 {
        let columns = grid::columns_for_width(self.terminal_width);
        let section = self
            .terminal_height
            .saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);
        grid::row_count(self.gallery.len(), columns)
            .saturating_sub(grid::visible_rows(section))
    }

    fn apply_cover(&mut self, id: u32, bytes: &[u8]) {
        let Some(index) = self.gallery.position(id) else {
            tracing::debug!("Ignoring cover for unknown playlist {}", id);
            return;
        };
        if !self.covers[index].is_pending() {
            return;
        }
        let Some(picker) = &self.picker else {
            return;
        };

        self.covers[index] = match CoverArt::decode(picker, bytes, self.palette.card) {
            Ok(art) => {
                tracing::debug!("Decoded cover for playlist {}", id);
                CoverSlot::Ready(Box::new(art))
            }
            Err(e) => {
                tracing::warn!("Failed to decode cover for playlist {}: {}", id, e);
                CoverSlot::Broken
            }
        };
    }
}
