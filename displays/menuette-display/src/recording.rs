//! Recording surface
//!
//! Keeps the glyphs, lines and boxes of the current frame in memory instead
//! of driving a panel. Used by simulators and by host tests to inspect what
//! the UI drew.

use heapless::{String, Vec};

use crate::backend::{DisplayError, DisplaySurface, FontSize, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Maximum glyphs in one frame (a full screen of small font is 168)
pub const MAX_GLYPHS: usize = 256;

/// Maximum lines or boxes in one frame
pub const MAX_SHAPES: usize = 16;

/// Maximum length of one reconstructed text row
pub const ROW_LEN: usize = 32;

/// A glyph drawn on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    pub x: u8,
    pub y: u8,
    pub byte: u8,
    pub font: FontSize,
}

/// Surface that records the current frame
///
/// A glyph drawn on the same cell origin as an earlier one replaces it, and
/// an identical line or box is stored once, so redrawing a value in place
/// does not grow the frame.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    glyphs: Vec<Glyph, MAX_GLYPHS>,
    lines: Vec<(u8, u8, u8, u8), MAX_SHAPES>,
    boxes: Vec<(u8, u8, u8, u8), MAX_SHAPES>,
    presents: u32,
    clears: u32,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Create an empty surface
    pub const fn new() -> Self {
        Self {
            glyphs: Vec::new(),
            lines: Vec::new(),
            boxes: Vec::new(),
            presents: 0,
            clears: 0,
        }
    }

    /// Glyphs of the current frame in drawing order
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Lines of the current frame
    pub fn lines(&self) -> &[(u8, u8, u8, u8)] {
        &self.lines
    }

    /// Boxes of the current frame
    pub fn boxes(&self) -> &[(u8, u8, u8, u8)] {
        &self.boxes
    }

    /// Number of presents so far
    pub fn presents(&self) -> u32 {
        self.presents
    }

    /// Number of clears so far
    pub fn clears(&self) -> u32 {
        self.clears
    }

    /// Text drawn with its cells starting at row `y`, ordered by x
    ///
    /// Gaps between glyphs are not filled in.
    pub fn row_text(&self, y: u8) -> String<ROW_LEN> {
        let mut row: Vec<Glyph, MAX_GLYPHS> =
            self.glyphs.iter().copied().filter(|g| g.y == y).collect();
        row.sort_unstable_by_key(|g| g.x);

        let mut text = String::new();
        for glyph in row {
            if text.push(char::from(glyph.byte)).is_err() {
                break;
            }
        }
        text
    }

    /// Check whether any row contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        let mut seen: Vec<u8, MAX_GLYPHS> = Vec::new();
        for glyph in &self.glyphs {
            if seen.contains(&glyph.y) {
                continue;
            }
            let _ = seen.push(glyph.y);
            if self.row_text(glyph.y).contains(needle) {
                return true;
            }
        }
        false
    }
}

impl DisplaySurface for RecordingSurface {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.glyphs.clear();
        self.lines.clear();
        self.boxes.clear();
        self.clears += 1;
        Ok(())
    }

    fn draw_glyph(
        &mut self,
        x: u8,
        y: u8,
        byte: u8,
        font: FontSize,
    ) -> Result<(), DisplayError> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return Err(DisplayError::InvalidCoordinates);
        }

        let glyph = Glyph { x, y, byte, font };
        if let Some(existing) = self.glyphs.iter_mut().find(|g| g.x == x && g.y == y) {
            *existing = glyph;
            return Ok(());
        }
        self.glyphs
            .push(glyph)
            .map_err(|_| DisplayError::BufferOverflow)
    }

    fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), DisplayError> {
        record_shape(&mut self.lines, (x0, y0, x1, y1))
    }

    fn draw_box(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), DisplayError> {
        record_shape(&mut self.boxes, (x0, y0, x1, y1))
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.presents += 1;
        Ok(())
    }
}

fn record_shape(
    shapes: &mut Vec<(u8, u8, u8, u8), MAX_SHAPES>,
    shape: (u8, u8, u8, u8),
) -> Result<(), DisplayError> {
    let (x0, y0, x1, y1) = shape;
    if x0.max(x1) >= SCREEN_WIDTH || y0.max(y1) >= SCREEN_HEIGHT {
        return Err(DisplayError::InvalidCoordinates);
    }
    if shapes.contains(&shape) {
        return Ok(());
    }
    shapes.push(shape).map_err(|_| DisplayError::BufferOverflow)
}
