//! Full-screen parameter editor
//!
//! Shows one value in a box and lets the user step it with B1 ("UP") and
//! B2 ("DOWN"). Holding a button repeats the step, first after 350 ms and
//! then every 200 ms, and the step grows tenfold every 20 repeats. B0
//! ("BACK") leaves the editor and writes the value back only if it changed.

mod adjust;

pub use adjust::{adjust_value, Accelerator};

use menuette_display::FontSize;
use menuette_hal::Button;

use crate::clock::deadline_reached;
use crate::format::right_justify;
use crate::menu::MenuItem;
use crate::ui::{Field, Ui, UiError};

const VALUE_X: u8 = 16;
const VALUE_Y: u8 = 24;
const VALUE_WIDTH: usize = 8;
const VALUE_BOX: (u8, u8, u8, u8) = (14, 22, 114, 42);

impl Ui<'_> {
    /// Edit `item` until B0 is pressed
    ///
    /// Returns `true` if the value changed and was written back. Items
    /// without storage return `false` at once.
    pub fn edit_parameter(&mut self, item: &MenuItem<'_>) -> Result<bool, UiError> {
        let Some(storage) = item.storage else {
            return Ok(false);
        };
        let original = item.read(&mut *self.storage);
        let mut value = original;
        debug!("edit {=str}: {=i16}", item.label, original);

        self.new_screen(Some(item.label))?;
        self.show_value(item, value)?;
        self.options(Some("DOWN"), Some("UP"), Some("BACK"))?;
        self.update()?;

        loop {
            let pressed = self.buttons.read();
            if pressed.contains(Button::B0) {
                self.buttons.wait_settled(Button::B0);
                break;
            }
            if pressed.contains(Button::B1) {
                value = self.hold_adjust(item, value, 1, Button::B1)?;
            } else if pressed.contains(Button::B2) {
                value = self.hold_adjust(item, value, -1, Button::B2)?;
            }
        }

        if value == original {
            return Ok(false);
        }
        storage.put(&mut *self.storage, value);
        debug!("edit {=str}: stored {=i16}", item.label, value);
        Ok(true)
    }

    /// Step once, then keep stepping while `button` stays down
    fn hold_adjust(
        &mut self,
        item: &MenuItem<'_>,
        mut value: i16,
        direction: i16,
        button: Button,
    ) -> Result<i16, UiError> {
        let signed = item.format.is_signed();
        let mut accel = Accelerator::new(direction, &self.timing);

        value = adjust_value(value, accel.step(), item.lower, item.upper, signed);
        self.show_value(item, value)?;

        let mut next_at = self
            .buttons
            .now_ms()
            .wrapping_add(self.timing.first_repeat_ms);
        loop {
            if !self.buttons.test(button) {
                self.buttons.wait_settled(button);
                return Ok(value);
            }
            if deadline_reached(self.buttons.now_ms(), next_at) {
                let step = accel.next_step();
                value = adjust_value(value, step, item.lower, item.upper, signed);
                self.show_value(item, value)?;
                next_at = self.buttons.now_ms().wrapping_add(self.timing.repeat_ms);
            }
        }
    }

    /// Draw the value in the large font inside its box and present
    fn show_value(&mut self, item: &MenuItem<'_>, value: i16) -> Result<(), UiError> {
        let mut field = Field::new();
        let _ = field.push_str(&item.render_value(value));
        right_justify(&mut field, VALUE_WIDTH);
        self.str_at(VALUE_X, VALUE_Y, &field, FontSize::Large)?;

        let (x0, y0, x1, y1) = VALUE_BOX;
        self.rect(x0, y0, x1, y1)?;
        self.update()
    }
}
