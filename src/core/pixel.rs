use crate::core::color::Color;
use std::fmt::{self, Display, Formatter};

const RESET: &str = "\x1b[0m";

/// One terminal cell: a glyph and its foreground color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub ch: char,
    pub color: Color,
}

impl Pixel {
    pub const BLANK: Pixel = Pixel {
        ch: ' ',
        color: Color::WHITE,
    };

    pub fn new(ch: char, color: Color) -> Self {
        Pixel { ch, color }
    }

    pub fn is_blank(&self) -> bool {
        self.ch == ' '
    }

    pub fn reset(&mut self) {
        *self = Pixel::BLANK;
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Pixel::BLANK
    }
}

/// Blank cells are a bare space, everything else is wrapped in a true-color escape.
impl Display for Pixel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            return f.write_str(" ");
        }
        write!(f, "{}{}{}", self.color.to_ansii_escape(), self.ch, RESET)
    }
}
