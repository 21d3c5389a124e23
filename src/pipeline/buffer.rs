use crate::core::Pixel;
use std::fmt::Write;

/// A depth-tested grid of terminal cells.
///
/// Depth is `1 / z` as produced by the projector, so the buffer keeps the *largest* value
/// it has seen per cell. Cleared cells hold negative infinity and always accept the first
/// write.
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    data: Vec<Pixel>,
    depth: Vec<f64>,
}

impl FrameBuffer {
    /// # Panics
    /// If either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "frame buffer needs a non-empty size, got {}x{}",
            width,
            height
        );
        FrameBuffer {
            width,
            height,
            data: vec![Pixel::BLANK; width * height],
            depth: vec![f64::NEG_INFINITY; width * height],
        }
    }

    pub fn clear(&mut self) {
        for pixel in &mut self.data {
            pixel.reset();
        }
        self.depth.fill(f64::NEG_INFINITY);
    }

    /// Writes `pixel` only if `depth` is strictly nearer than what the cell holds. Ties keep
    /// the earlier write.
    ///
    /// # Panics
    /// If `(x, y)` is outside the buffer.
    pub fn try_set_pixel(&mut self, x: usize, y: usize, depth: f64, pixel: Pixel) -> bool {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} buffer",
            x,
            y,
            self.width,
            self.height
        );
        let index = x + y * self.width;
        // NOTE: Depth Check here
        if depth > self.depth[index] {
            self.data[index] = pixel;
            self.depth[index] = depth;
            return true;
        }
        false
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<&Pixel> {
        if x < self.width && y < self.height {
            self.data.get(x + y * self.width)
        } else {
            None
        }
    }

    pub fn depth_at(&self, x: usize, y: usize) -> Option<f64> {
        if x < self.width && y < self.height {
            self.depth.get(x + y * self.width).copied()
        } else {
            None
        }
    }

    /// Number of cells holding something other than the blank glyph.
    pub fn lit_cells(&self) -> usize {
        self.data.iter().filter(|p| !p.is_blank()).count()
    }

    /// Row-major text, rows separated by `'\n'` with no trailing separator.
    pub fn render(&self) -> String {
        // Most cells are escaped: 19 bytes of color + glyph + 4 of reset.
        let mut output = String::with_capacity(self.data.len() * 24 + self.height);
        for (y, row) in self.data.chunks(self.width).enumerate() {
            if y > 0 {
                output.push('\n');
            }
            for pixel in row {
                // Writing into a String can't fail.
                let _ = write!(output, "{}", pixel);
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;

    fn px(ch: char) -> Pixel {
        Pixel::new(ch, Color::WHITE)
    }

    #[test]
    fn first_write_wins_regardless_of_sign() {
        let mut buf = FrameBuffer::new(2, 2);
        assert!(buf.try_set_pixel(0, 0, -1000.0, px('a')));
        assert_eq!(buf.pixel(0, 0), Some(&px('a')));
    }

    #[test]
    fn only_strictly_nearer_writes_replace() {
        let mut buf = FrameBuffer::new(3, 3);
        assert!(buf.try_set_pixel(1, 2, 1.0, px('a')));
        assert!(!buf.try_set_pixel(1, 2, 0.5, px('b')));
        assert_eq!(buf.pixel(1, 2), Some(&px('a')));
        assert!(buf.try_set_pixel(1, 2, 2.0, px('c')));
        assert_eq!(buf.pixel(1, 2), Some(&px('c')));
        assert_eq!(buf.depth_at(1, 2), Some(2.0));
    }

    #[test]
    fn equal_depth_keeps_earlier_write() {
        let mut buf = FrameBuffer::new(1, 1);
        assert!(buf.try_set_pixel(0, 0, 0.25, px('a')));
        assert!(!buf.try_set_pixel(0, 0, 0.25, px('b')));
        assert_eq!(buf.pixel(0, 0), Some(&px('a')));
    }

    #[test]
    fn clear_resets_cells_and_depth() {
        let mut buf = FrameBuffer::new(2, 1);
        buf.try_set_pixel(1, 0, 3.0, px('x'));
        assert_eq!(buf.lit_cells(), 1);
        buf.clear();
        assert_eq!(buf.lit_cells(), 0);
        assert_eq!(buf.depth_at(1, 0), Some(f64::NEG_INFINITY));
        // A far write is accepted again after clearing.
        assert!(buf.try_set_pixel(1, 0, 0.1, px('y')));
    }

    #[test]
    fn render_is_row_major_with_separators() {
        let mut buf = FrameBuffer::new(3, 2);
        assert_eq!(buf.render(), "   \n   ");

        buf.try_set_pixel(2, 0, 1.0, Pixel::new('@', Color::new(1, 2, 3)));
        buf.try_set_pixel(0, 1, 1.0, Pixel::new('.', Color::new(4, 5, 6)));
        assert_eq!(
            buf.render(),
            "  \x1b[38;2;1;2;3m@\x1b[0m\n\x1b[38;2;4;5;6m.\x1b[0m  "
        );
    }

    #[test]
    fn out_of_range_reads_are_none() {
        let buf = FrameBuffer::new(2, 2);
        assert!(buf.pixel(2, 0).is_none());
        assert!(buf.depth_at(0, 2).is_none());
    }

    #[test]
    #[should_panic(expected = "non-empty size")]
    fn zero_height_panics() {
        FrameBuffer::new(4, 0);
    }
}
