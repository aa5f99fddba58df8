//! Cursor-based text output

use heapless::String;
use menuette_display::{FontSize, SCREEN_HEIGHT, SCREEN_WIDTH};

use super::{Cursor, Ui, UiError};
use crate::format::{right_justify, to_text, Format};

/// Widest right-justified number field
pub const MAX_FIELD: usize = 20;

/// Right-justified field of up to [`MAX_FIELD`] characters
pub(crate) type Field = String<MAX_FIELD>;

/// Pixels between the title row and the first content row
const TITLE_GAP: u8 = 2;

/// Columns taken by the value side of a name/value line: `=` plus the value
pub(crate) const VALUE_COLUMNS: u8 = 9;
const VALUE_WIDTH: usize = VALUE_COLUMNS as usize - 1;

/// `=` followed by `text` right-justified to eight characters
pub(crate) fn value_field(text: &str) -> Field {
    let mut value = Field::new();
    let _ = value.push_str(text);
    right_justify(&mut value, VALUE_WIDTH);

    let mut field = Field::new();
    let _ = field.push('=');
    let _ = field.push_str(&value);
    field
}

fn fits(x: u8, y: u8, font: FontSize) -> bool {
    u16::from(x) + u16::from(font.width()) <= u16::from(SCREEN_WIDTH)
        && u16::from(y) + u16::from(font.height()) <= u16::from(SCREEN_HEIGHT)
}

impl Ui<'_> {
    pub fn x(&self) -> u8 {
        self.cursor.x
    }

    pub fn y(&self) -> u8 {
        self.cursor.y
    }

    pub fn set_xy(&mut self, x: u8, y: u8) {
        self.cursor.x = x;
        self.cursor.y = y;
    }

    /// Move to the start of the next line of the last font used
    pub fn crlf(&mut self) {
        self.cursor.x = 0;
        self.cursor.y = self.cursor.y.saturating_add(self.cursor.font.height());
    }

    /// Draw text at the cursor, wrapping at the right edge
    ///
    /// Glyphs that would fall off the bottom are skipped.
    pub fn put_str(&mut self, text: &str, font: FontSize) -> Result<(), UiError> {
        self.put_bytes(text.as_bytes(), font)
    }

    pub(crate) fn put_bytes(&mut self, bytes: &[u8], font: FontSize) -> Result<(), UiError> {
        self.cursor.font = font;
        let (w, h) = (font.width(), font.height());
        for &byte in bytes {
            let Cursor { x, y, .. } = self.cursor;
            if fits(x, y, font) {
                self.display.draw_glyph(x, y, byte, font)?;
            }
            self.cursor.x = x.saturating_add(w);
            if self.cursor.x > SCREEN_WIDTH - w {
                self.cursor.x = 0;
                self.cursor.y = y.saturating_add(h);
            }
        }
        Ok(())
    }

    pub fn str_at(&mut self, x: u8, y: u8, text: &str, font: FontSize) -> Result<(), UiError> {
        self.set_xy(x, y);
        self.put_str(text, font)
    }

    /// Draw a number right-justified to `width` (at most [`MAX_FIELD`])
    pub fn num(
        &mut self,
        value: i16,
        width: usize,
        format: Format,
        font: FontSize,
    ) -> Result<(), UiError> {
        let mut field = Field::new();
        let _ = field.push_str(&to_text(value, format));
        right_justify(&mut field, width.min(MAX_FIELD));
        self.put_str(&field, font)
    }

    pub fn num_at(
        &mut self,
        x: u8,
        y: u8,
        value: i16,
        width: usize,
        format: Format,
        font: FontSize,
    ) -> Result<(), UiError> {
        self.set_xy(x, y);
        self.num(value, width, format, font)
    }

    /// Draw `name` and a value in the right-hand nine columns
    ///
    /// The name is cut to fit. Nothing is drawn if fewer than nine columns
    /// remain right of the cursor. Leaves the cursor one line down at the
    /// starting x.
    pub fn param_line(
        &mut self,
        name: &str,
        value: i16,
        format: Format,
        font: FontSize,
    ) -> Result<(), UiError> {
        let text = to_text(value, format);
        let Cursor { x, y, .. } = self.cursor;
        let columns = SCREEN_WIDTH.saturating_sub(x) / font.width();
        if columns < VALUE_COLUMNS {
            return Ok(());
        }

        let room = usize::from(columns - VALUE_COLUMNS);
        let name = name.as_bytes();
        self.put_bytes(&name[..name.len().min(room)], font)?;
        self.set_xy(SCREEN_WIDTH - VALUE_COLUMNS * font.width(), y);
        self.put_str(&value_field(&text), font)?;

        self.cursor = Cursor {
            x,
            y: y.saturating_add(font.height()),
            font,
        };
        Ok(())
    }

    pub fn line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), UiError> {
        self.display.draw_line(x0, y0, x1, y1)?;
        Ok(())
    }

    /// Box outline
    pub fn rect(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), UiError> {
        self.display.draw_box(x0, y0, x1, y1)?;
        Ok(())
    }

    /// Clear the screen and draw `title` in the medium font
    ///
    /// The cursor ends up at the left edge just under the title.
    pub fn new_screen(&mut self, title: Option<&str>) -> Result<(), UiError> {
        self.clear()?;
        if let Some(title) = title {
            self.put_str(title, FontSize::Medium)?;
            self.crlf();
            self.cursor.y = self.cursor.y.saturating_add(TITLE_GAP);
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), UiError> {
        self.display.clear()?;
        self.cursor = Cursor::HOME;
        Ok(())
    }

    /// Show what has been drawn and home the cursor
    pub fn update(&mut self) -> Result<(), UiError> {
        self.display.present()?;
        self.cursor = Cursor::HOME;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, ui, Sim};

    #[test]
    fn test_put_str_advances() {
        let sim = Sim::new();
        let (mut surface, mut storage) = fixtures();
        let mut ui = ui(&mut surface, &sim, &mut storage);
        ui.put_str("AB", FontSize::Small).unwrap();
        assert_eq!(ui.x(), 12);
        ui.put_str("C", FontSize::Large).unwrap();
        assert_eq!(ui.x(), 24);
        ui.crlf();
        assert_eq!((ui.x(), ui.y()), (0, 16));
        drop(ui);

        let glyphs = surface.glyphs();
        assert_eq!(glyphs.len(), 3);
        assert_eq!((glyphs[1].x, glyphs[1].byte), (6, b'B'));
        assert_eq!(glyphs[2].font, FontSize::Large);
    }

    #[test]
    fn test_put_str_wraps_at_right_edge() {
        let sim = Sim::new();
        let (mut surface, mut storage) = fixtures();
        let mut ui = ui(&mut surface, &sim, &mut storage);
        ui.put_str("abcdefghijklmnopqrstuvw", FontSize::Small).unwrap();
        drop(ui);

        assert_eq!(surface.row_text(0).as_str(), "abcdefghijklmnopqrstu");
        assert_eq!(surface.row_text(8).as_str(), "vw");
    }

    #[test]
    fn test_glyphs_below_screen_are_skipped() {
        let sim = Sim::new();
        let (mut surface, mut storage) = fixtures();
        let mut ui = ui(&mut surface, &sim, &mut storage);
        ui.str_at(0, 60, "hidden", FontSize::Small).unwrap();
        drop(ui);
        assert!(surface.glyphs().is_empty());
    }

    #[test]
    fn test_num_right_justifies() {
        let sim = Sim::new();
        let (mut surface, mut storage) = fixtures();
        let mut ui = ui(&mut surface, &sim, &mut storage);
        ui.num_at(0, 0, 42, 5, Format::DECIMAL, FontSize::Small).unwrap();
        ui.num_at(0, 8, -5, 50, Format::X10, FontSize::Small).unwrap();
        drop(ui);

        assert_eq!(surface.row_text(0).as_str(), "   42");
        let row = surface.row_text(8);
        assert_eq!(row.len(), MAX_FIELD);
        assert!(row.ends_with("-0.5"));
    }

    #[test]
    fn test_param_line() {
        let sim = Sim::new();
        let (mut surface, mut storage) = fixtures();
        let mut ui = ui(&mut surface, &sim, &mut storage);
        ui.param_line("Speed", 42, Format::DECIMAL, FontSize::Small).unwrap();
        assert_eq!((ui.x(), ui.y()), (0, 8));
        ui.param_line("ABCDEFGHIJKLMNOPQRSTUV", 7, Format::DECIMAL, FontSize::Small)
            .unwrap();
        drop(ui);

        assert_eq!(surface.row_text(0).as_str(), "Speed=      42");
        assert_eq!(surface.row_text(8).as_str(), "ABCDEFGHIJKL=       7");
    }

    #[test]
    fn test_param_line_needs_nine_columns() {
        let sim = Sim::new();
        let (mut surface, mut storage) = fixtures();
        let mut ui = ui(&mut surface, &sim, &mut storage);
        ui.set_xy(80, 0);
        ui.param_line("Speed", 42, Format::DECIMAL, FontSize::Small).unwrap();
        assert_eq!((ui.x(), ui.y()), (80, 0));
        drop(ui);
        assert!(surface.glyphs().is_empty());
    }

    #[test]
    fn test_new_screen_and_update() {
        let sim = Sim::new();
        let (mut surface, mut storage) = fixtures();
        let mut ui = ui(&mut surface, &sim, &mut storage);
        ui.new_screen(Some("Main")).unwrap();
        assert_eq!((ui.x(), ui.y()), (0, 14));
        ui.rect(14, 22, 114, 42).unwrap();
        ui.update().unwrap();
        assert_eq!((ui.x(), ui.y()), (0, 0));
        drop(ui);

        assert_eq!(surface.clears(), 1);
        assert_eq!(surface.presents(), 1);
        assert_eq!(surface.row_text(0).as_str(), "Main");
        assert_eq!(surface.boxes(), &[(14, 22, 114, 42)]);
    }

    #[test]
    fn test_value_field() {
        assert_eq!(value_field("42").as_str(), "=      42");
        assert_eq!(value_field("0b10100101").as_str(), "=0b10100101");
    }
}
