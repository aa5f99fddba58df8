//! Hex dumps of byte and word buffers

use menuette_hal::Button;

use super::{visible_rows, ROW_FONT};
use crate::format::Format;
use crate::ui::{Ui, UiError};

const BYTES_PER_ROW: usize = 4;
const WORDS_PER_ROW: usize = 2;

impl Ui<'_> {
    /// Scrollable dump of `bytes`, four per row: `00: 01 02 03 04`
    pub fn byte_dump(&mut self, title: &str, bytes: &[u8]) -> Result<(), UiError> {
        let rows = bytes.len().div_ceil(BYTES_PER_ROW);
        self.scroll_rows(title, rows, |ui, row, y| {
            let offset = row * BYTES_PER_ROW;
            ui.dump_offset(offset, y)?;
            for &byte in bytes.iter().skip(offset).take(BYTES_PER_ROW) {
                ui.num(i16::from(byte), 3, Format::HEX2, ROW_FONT)?;
            }
            Ok(())
        })
    }

    /// Scrollable dump of `words`, two per row: `00: 0102 0304`
    pub fn word_dump(&mut self, title: &str, words: &[u16]) -> Result<(), UiError> {
        let rows = words.len().div_ceil(WORDS_PER_ROW);
        self.scroll_rows(title, rows, |ui, row, y| {
            let offset = row * WORDS_PER_ROW;
            ui.dump_offset(offset, y)?;
            for &word in words.iter().skip(offset).take(WORDS_PER_ROW) {
                ui.num(word as i16, 5, Format::HEX4, ROW_FONT)?;
            }
            Ok(())
        })
    }

    fn dump_offset(&mut self, offset: usize, y: u8) -> Result<(), UiError> {
        // Two hex digits; longer buffers show the low byte of the offset
        self.num_at(0, y, offset as i16, 2, Format::HEX2, ROW_FONT)?;
        self.put_str(": ", ROW_FONT)
    }

    fn scroll_rows<F>(&mut self, title: &str, rows: usize, mut draw_row: F) -> Result<(), UiError>
    where
        F: FnMut(&mut Self, usize, u8) -> Result<(), UiError>,
    {
        let mut top = 0usize;
        loop {
            self.new_screen(Some(title))?;
            let mut y = self.y();
            let visible = visible_rows(y);
            for row in (top..rows).take(visible) {
                draw_row(self, row, y)?;
                y = y.saturating_add(ROW_FONT.height());
            }

            match self.wait_options(Some("UP"), Some("DOWN"), Some("BACK"))? {
                Some(Button::B0) => return Ok(()),
                Some(Button::B1) => {
                    if top + visible < rows {
                        top += 1;
                    }
                }
                Some(Button::B2) => top = top.saturating_sub(1),
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, ui, Sim};

    #[test]
    fn test_byte_dump_rows() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0xAB, 0xCD];
        let sim = Sim::new().tap(Button::B0, 100);
        let (mut surface, mut storage) = fixtures();
        let mut ui = ui(&mut surface, &sim, &mut storage);
        ui.byte_dump("Bytes", &bytes).unwrap();
        drop(ui);

        assert_eq!(surface.row_text(14).as_str(), "00:  01 02 03 04");
        assert_eq!(surface.row_text(22).as_str(), "04:  AB CD");
        assert!(surface.row_text(30).is_empty());
    }

    #[test]
    fn test_word_dump_rows() {
        let words = [0x1234, 0xBEEF, 0x0001];
        let sim = Sim::new().tap(Button::B0, 100);
        let (mut surface, mut storage) = fixtures();
        let mut ui = ui(&mut surface, &sim, &mut storage);
        ui.word_dump("Words", &words).unwrap();
        drop(ui);

        assert_eq!(surface.row_text(14).as_str(), "00:  1234 BEEF");
        assert_eq!(surface.row_text(22).as_str(), "02:  0001");
    }

    #[test]
    fn test_dump_scrolls_one_row() {
        let bytes: [u8; 32] = core::array::from_fn(|i| i as u8);
        let sim = Sim::new()
            .tap(Button::B1, 100)
            .tap(Button::B1, 200)
            .tap(Button::B2, 300)
            .tap(Button::B0, 400);
        let (mut surface, mut storage) = fixtures();
        let mut ui = ui(&mut surface, &sim, &mut storage);
        ui.byte_dump("Bytes", &bytes).unwrap();
        drop(ui);

        assert!(surface.row_text(14).starts_with("04:"));
        assert_eq!(surface.presents(), 4);
    }

    #[test]
    fn test_dump_does_not_scroll_past_end() {
        let bytes = [0u8; 8];
        let sim = Sim::new().tap(Button::B1, 100).tap(Button::B0, 200);
        let (mut surface, mut storage) = fixtures();
        let mut ui = ui(&mut surface, &sim, &mut storage);
        ui.byte_dump("Bytes", &bytes).unwrap();
        drop(ui);

        assert!(surface.row_text(14).starts_with("00:"));
    }
}
