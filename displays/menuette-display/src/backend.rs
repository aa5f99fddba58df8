//! Display surface trait
//!
//! Defines the interface the UI engine draws through.

/// Panel width in pixels
pub const SCREEN_WIDTH: u8 = 128;

/// Panel height in pixels
pub const SCREEN_HEIGHT: u8 = 64;

/// Display surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Buffer overflow
    BufferOverflow,
}

/// Font sizes supported by the panel driver
///
/// Each font has a fixed glyph cell. The large font only carries digits
/// and some punctuation on most drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// 6x8 pixels
    Small,
    /// 8x12 pixels
    Medium,
    /// 12x16 pixels
    Large,
}

impl FontSize {
    /// Glyph cell width in pixels
    pub const fn width(self) -> u8 {
        match self {
            FontSize::Small => 6,
            FontSize::Medium => 8,
            FontSize::Large => 12,
        }
    }

    /// Glyph cell height in pixels
    pub const fn height(self) -> u8 {
        match self {
            FontSize::Small => 8,
            FontSize::Medium => 12,
            FontSize::Large => 16,
        }
    }

    /// Number of glyphs that fit on one line of the panel
    pub const fn columns(self) -> u8 {
        SCREEN_WIDTH / self.width()
    }
}

/// Pixel-level display surface
///
/// Drawing calls write into the driver's buffer; nothing is visible until
/// [`present`](DisplaySurface::present) is called.
pub trait DisplaySurface {
    /// Clear the whole buffer
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw one character cell with its top-left corner at (x, y)
    ///
    /// The glyph is an ASCII byte. Drawing replaces the cell's previous
    /// contents.
    fn draw_glyph(&mut self, x: u8, y: u8, glyph: u8, font: FontSize)
        -> Result<(), DisplayError>;

    /// Draw a one-pixel line between two points, inclusive
    fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), DisplayError>;

    /// Draw a rectangle outline given two opposite corners, inclusive
    fn draw_box(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), DisplayError>;

    /// Make everything drawn since the last present visible
    fn present(&mut self) -> Result<(), DisplayError>;
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    fn clear(&mut self) -> Result<(), DisplayError> {
        (**self).clear()
    }

    fn draw_glyph(
        &mut self,
        x: u8,
        y: u8,
        glyph: u8,
        font: FontSize,
    ) -> Result<(), DisplayError> {
        (**self).draw_glyph(x, y, glyph, font)
    }

    fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), DisplayError> {
        (**self).draw_line(x0, y0, x1, y1)
    }

    fn draw_box(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), DisplayError> {
        (**self).draw_box(x0, y0, x1, y1)
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        (**self).present()
    }
}
