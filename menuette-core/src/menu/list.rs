//! Live value list

use core::cell::Cell;

use menuette_display::SCREEN_WIDTH;
use menuette_hal::Button;

use super::{visible_rows, ROW_FONT};
use crate::format::Format;
use crate::ui::{Ui, UiError};

const VALUE_WIDTH: u8 = 8;

/// Read-only row of a value list
#[derive(Debug, Clone, Copy)]
pub struct ListItem<'a> {
    pub name: &'a str,
    pub value: &'a Cell<u16>,
    pub format: Format,
}

impl<'a> ListItem<'a> {
    pub const fn new(name: &'a str, value: &'a Cell<u16>, format: Format) -> Self {
        Self {
            name,
            value,
            format,
        }
    }
}

impl Ui<'_> {
    /// Show a scrolling list of live values until B0 ("BACK")
    ///
    /// B2 ("UP") and B1 ("DOWN") scroll by one row. While no button is
    /// pressed `update` is polled; returning `true` means a value changed
    /// and the list is redrawn.
    pub fn run_list(
        &mut self,
        title: &str,
        items: &[ListItem<'_>],
        mut update: Option<&mut dyn FnMut() -> bool>,
    ) -> Result<(), UiError> {
        let value_x = SCREEN_WIDTH - VALUE_WIDTH * ROW_FONT.width();
        let mut top = 0usize;
        loop {
            self.new_screen(Some(title))?;
            let top_y = self.y();
            let visible = visible_rows(top_y);
            let mut y = top_y;
            for item in items.iter().skip(top).take(visible) {
                self.str_at(0, y, item.name, ROW_FONT)?;
                self.num_at(
                    value_x,
                    y,
                    item.value.get() as i16,
                    usize::from(VALUE_WIDTH),
                    item.format,
                    ROW_FONT,
                )?;
                y = y.saturating_add(ROW_FONT.height());
            }
            self.options(Some("UP"), Some("DOWN"), Some("BACK"))?;
            self.update()?;

            let last_top = items.len().saturating_sub(visible);
            loop {
                let pressed = self.buttons.read();
                if pressed.contains(Button::B0) {
                    self.buttons.wait_settled(Button::B0);
                    return Ok(());
                }
                if pressed.contains(Button::B1) {
                    self.buttons.wait_settled(Button::B1);
                    top = (top + 1).min(last_top);
                    break;
                }
                if pressed.contains(Button::B2) {
                    self.buttons.wait_settled(Button::B2);
                    top = top.saturating_sub(1);
                    break;
                }
                if let Some(refresh) = update.as_deref_mut() {
                    if refresh() {
                        break;
                    }
                }
            }
        }
    }
}
