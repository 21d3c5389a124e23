#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8, // Red component (0 - 255)
    pub g: u8, // Green component (0 - 255)
    pub b: u8, // Blue component (0 - 255)
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a hexadecimal string.
    /// Accepts formats like "#RRGGBB" or "RRGGBB".
    pub fn from_hex(hex: &str) -> Result<Self, &'static str> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Err("Hex string should be 6 characters long (RRGGBB).");
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid red component in hex")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid green component in hex")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid blue component in hex")?;

        Ok(Self::new(r, g, b))
    }

    const fn hex_char_to_u8(c: char) -> u8 {
        match c {
            '0'..='9' => (c as u8) - b'0',
            'a'..='f' => (c as u8) - b'a' + 10,
            'A'..='F' => (c as u8) - b'A' + 10,
            _ => 0,
        }
    }

    const fn hex_pair_to_u8(high: char, low: char) -> u8 {
        (Self::hex_char_to_u8(high) << 4) | Self::hex_char_to_u8(low)
    }

    /// Const-context constructor for the palette below. Expects a well formed "RRGGBB".
    const fn hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        let offset = if bytes[0] == b'#' { 1 } else { 0 };

        let r = Self::hex_pair_to_u8(bytes[offset] as char, bytes[offset + 1] as char);
        let g = Self::hex_pair_to_u8(bytes[offset + 2] as char, bytes[offset + 3] as char);
        let b = Self::hex_pair_to_u8(bytes[offset + 4] as char, bytes[offset + 5] as char);

        Self { r, g, b }
    }

    /// Terminal true-color foreground escape for this color.
    pub fn to_ansii_escape(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Linear interpolation towards `end`. `t` is clamped to [0, 1] first, so callers can
    /// feed raw projections straight in. Channels truncate, like [`Color::scaled`].
    pub fn lerp(&self, end: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let a = a as f64;
            let b = b as f64;
            (a + (b - a) * t).trunc().clamp(0.0, 255.0) as u8
        };
        Color {
            r: channel(self.r, end.r),
            g: channel(self.g, end.g),
            b: channel(self.b, end.b),
        }
    }

    /// Multiplies every channel by `factor`, truncating and clamping to the channel range.
    pub fn scaled(&self, factor: f64) -> Color {
        let channel = |c: u8| (c as f64 * factor).trunc().clamp(0.0, 255.0) as u8;
        Color {
            r: channel(self.r),
            g: channel(self.g),
            b: channel(self.b),
        }
    }
}

// Predefined colors
impl Color {
    pub const BLACK: Color = Color::hex("000000");
    pub const WHITE: Color = Color::hex("FFFFFF");
    pub const RED: Color = Color::hex("FF0000");
    pub const BLUE: Color = Color::hex("0000FF");
    pub const AZURE: Color = Color::hex("07AEFF");
    pub const VIOLET: Color = Color::hex("945DFF");
    pub const ORCHID: Color = Color::hex("C757BC");
    pub const TANGERINE: Color = Color::hex("FE8902");
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}
