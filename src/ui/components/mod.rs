//! UI components module.

pub mod card;
pub mod cover;

pub use card::{render_card, Card};
pub use cover::{CoverArt, CoverSlot};
