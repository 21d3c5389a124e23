use crate::core::{Color, Pixel};

/// Glyphs from sparse (dark) to dense (bright).
pub const RAMP: &[char] = &['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// Maps lighting to glyphs and shaded colors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsciiMapper {
    /// Color multiplier at zero brightness, in [0, 1]. Keeps unlit faces from going black and
    /// vanishing into the background.
    pub min_color_brightness: f64,
}

impl AsciiMapper {
    pub fn new(min_color_brightness: f64) -> Self {
        Self {
            min_color_brightness,
        }
    }

    /// Brightness is clamped to [0, 1] before picking a glyph.
    pub fn glyph_for(brightness: f64) -> char {
        let clamped = brightness.clamp(0.0, 1.0);
        let index = (clamped * (RAMP.len() - 1) as f64) as usize;
        RAMP[index]
    }

    /// Glyph plus a color darkened linearly from `min_color_brightness` (unlit) up to the
    /// full color (fully lit).
    pub fn shade(&self, brightness: f64, color: Color) -> Pixel {
        let brightness = brightness.clamp(0.0, 1.0);
        let multiplier =
            self.min_color_brightness + (1.0 - self.min_color_brightness) * brightness;
        Pixel::new(Self::glyph_for(brightness), color.scaled(multiplier))
    }

    /// [`AsciiMapper::shade`] rendered as an escaped terminal string.
    pub fn colored_char(&self, brightness: f64, color: Color) -> String {
        self.shade(brightness, color).to_string()
    }
}

impl Default for AsciiMapper {
    fn default() -> Self {
        Self::new(0.5)
    }
}
