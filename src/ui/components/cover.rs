//! Cover image slot of a card.

use image::DynamicImage;
use ratatui::style::Color;
use ratatui_image::{picker::Picker, protocol::StatefulProtocol};

use crate::theme::mix;

/// Resting opacity of a cover; hover raises it to full.
pub const REST_OPACITY: f32 = 0.9;

/// Load state of a card's cover image.
pub enum CoverSlot {
    /// Covers are switched off in the config
    Disabled,
    /// Fetch in flight
    Pending,
    /// Decoded and ready to draw
    Ready(Box<CoverArt>),
    /// Empty URL, failed fetch or undecodable bytes
    Broken,
}

impl CoverSlot {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_broken(&self) -> bool {
        matches!(self, Self::Broken)
    }
}

/// A decoded cover, prepared at resting and full opacity.
pub struct CoverArt {
    dim: StatefulProtocol,
    full: StatefulProtocol,
}

impl CoverArt {
    /// Decode image bytes and build both terminal protocols.
    pub fn decode(picker: &Picker, bytes: &[u8], backdrop: Color) -> image::ImageResult<Self> {
        let image = image::load_from_memory(bytes)?;
        let dim = faded(&image, backdrop, REST_OPACITY);
        Ok(Self {
            dim: picker.new_resize_protocol(dim),
            full: picker.new_resize_protocol(image),
        })
    }

    /// Protocol to draw for the given hover fade value.
    pub fn protocol(&mut self, fade: f32) -> &mut StatefulProtocol {
        if fade >= 0.5 {
            &mut self.full
        } else {
            &mut self.dim
        }
    }
}

/// Composite `image` at `opacity` over a solid `backdrop`.
fn faded(image: &DynamicImage, backdrop: Color, opacity: f32) -> DynamicImage {
    let mut rgb = image.to_rgb8();
    for pixel in rgb.pixels_mut() {
        let [r, g, b] = pixel.0;
        if let Color::Rgb(r, g, b) = mix(backdrop, Color::Rgb(r, g, b), opacity) {
            pixel.0 = [r, g, b];
        }
    }
    DynamicImage::ImageRgb8(rgb)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgb, RgbImage};

    use super::*;

    fn png_bytes() -> Vec<u8> {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([200, 100, 50])));
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_faded_blends_toward_backdrop() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([200, 100, 0])));
        let faded = faded(&image, Color::Rgb(0, 0, 100), 0.9).to_rgb8();
        assert_eq!(faded.get_pixel(0, 0).0, [180, 90, 10]);
    }

    #[test]
    fn test_decode_valid_image() {
        let picker = Picker::from_fontsize((8, 16));
        assert!(CoverArt::decode(&picker, &png_bytes(), Color::Rgb(26, 26, 26)).is_ok());
    }

    #[test]
    fn test_decode_garbage_fails() {
        let picker = Picker::from_fontsize((8, 16));
        assert!(CoverArt::decode(&picker, b"not an image", Color::Rgb(26, 26, 26)).is_err());
    }
}
