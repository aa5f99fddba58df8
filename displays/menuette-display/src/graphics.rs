//! embedded-graphics bridge
//!
//! Draws onto any monochrome [`DrawTarget`] so the UI can run on panels
//! that already have an embedded-graphics driver. The mono fonts are the
//! closest built-in faces that fit each glyph cell:
//!
//! | Font   | Cell  | Face      |
//! |--------|-------|-----------|
//! | Small  | 6x8   | `FONT_5X8`  |
//! | Medium | 8x12  | `FONT_6X12` |
//! | Large  | 12x16 | `FONT_9X15` |

use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X12, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::backend::{DisplayError, DisplaySurface, FontSize};

/// Flush hook type for targets that draw straight to the panel
pub type NoFlush<D> = fn(&mut D) -> Result<(), DisplayError>;

fn no_flush<D>(_target: &mut D) -> Result<(), DisplayError> {
    Ok(())
}

/// Display surface over an embedded-graphics draw target
///
/// `flush` is called on [`present`](DisplaySurface::present); buffered
/// drivers push their framebuffer to the panel there.
pub struct GraphicsSurface<D, F> {
    target: D,
    flush: F,
}

impl<D> GraphicsSurface<D, NoFlush<D>>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Wrap a target that needs no flush
    pub fn unbuffered(target: D) -> Self {
        Self {
            target,
            flush: no_flush::<D>,
        }
    }
}

impl<D, F> GraphicsSurface<D, F>
where
    D: DrawTarget<Color = BinaryColor>,
    F: FnMut(&mut D) -> Result<(), DisplayError>,
{
    /// Wrap a target with a flush hook
    pub fn new(target: D, flush: F) -> Self {
        Self { target, flush }
    }

    /// Access the underlying target
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Give the target back
    pub fn release(self) -> D {
        self.target
    }
}

fn mono_font(font: FontSize) -> &'static MonoFont<'static> {
    match font {
        FontSize::Small => &FONT_5X8,
        FontSize::Medium => &FONT_6X12,
        FontSize::Large => &FONT_9X15,
    }
}

fn point(x: u8, y: u8) -> Point {
    Point::new(i32::from(x), i32::from(y))
}

fn stroke() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyle::with_stroke(BinaryColor::On, 1)
}

impl<D, F> DisplaySurface for GraphicsSurface<D, F>
where
    D: DrawTarget<Color = BinaryColor>,
    F: FnMut(&mut D) -> Result<(), DisplayError>,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_glyph(
        &mut self,
        x: u8,
        y: u8,
        glyph: u8,
        font: FontSize,
    ) -> Result<(), DisplayError> {
        let cell = Size::new(u32::from(font.width()), u32::from(font.height()));
        Rectangle::new(point(x, y), cell)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)?;

        let mut buf = [0u8; 4];
        let text = char::from(glyph).encode_utf8(&mut buf);
        let style = MonoTextStyle::new(mono_font(font), BinaryColor::On);
        Text::with_baseline(text, point(x, y), style, Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), DisplayError> {
        Line::new(point(x0, y0), point(x1, y1))
            .into_styled(stroke())
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_box(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), DisplayError> {
        Rectangle::with_corners(point(x0, y0), point(x1, y1))
            .into_styled(stroke())
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        (self.flush)(&mut self.target)
    }
}
