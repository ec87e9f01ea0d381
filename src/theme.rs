//! Colour tokens and the static style configuration.

use ratatui::style::Color;

/// Named colour tokens used by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub card: Color,
    pub accent: Color,
    /// Card captions
    pub text: Color,
    /// Tag line under a card title
    pub text_soft: Color,
    /// Header subtitle
    pub text_muted: Color,
    /// Footer
    pub text_faint: Color,
    pub border: Color,
}

impl Palette {
    pub const VIBE: Self = Self {
        background: Color::Rgb(0x0f, 0x0f, 0x0f),
        card: Color::Rgb(0x1a, 0x1a, 0x1a),
        accent: Color::Rgb(0xe8, 0x79, 0xf9),
        text: Color::Rgb(0xff, 0xff, 0xff),
        text_soft: Color::Rgb(0xd1, 0xd5, 0xdb),  // gray-300
        text_muted: Color::Rgb(0x9c, 0xa3, 0xaf), // gray-400
        text_faint: Color::Rgb(0x6b, 0x72, 0x80), // gray-500
        border: Color::Rgb(0x2a, 0x2a, 0x2a),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::VIBE
    }
}

/// Declarative styling surface: which sources reference the palette tokens,
/// and the tokens themselves.
#[derive(Debug, Clone, Copy)]
pub struct StyleConfig {
    pub content: &'static [&'static str],
    pub palette: Palette,
}

pub const STYLE: StyleConfig = StyleConfig {
    content: &["./src/**/*.rs"],
    palette: Palette::VIBE,
};

/// Linear blend of two RGB colours; `t = 0` is `from`, `t = 1` is `to`.
///
/// Non-RGB colours cannot be mixed, so the nearer endpoint wins.
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            Color::Rgb(lerp(r1, r2, t), lerp(g1, g2, t), lerp(b1, b2, t))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Composite black at `alpha` over `base`.
pub fn shade(base: Color, alpha: f32) -> Color {
    mix(base, Color::Rgb(0, 0, 0), alpha)
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}
