//! Text console over the display surface
//!
//! [`Ui`] bundles everything a screen needs: the display, the debounced
//! buttons, durable storage and the timing configuration. It keeps a text
//! cursor in pixels, origin top-left:
//!
//! ```text
//!  (0,0)
//!    +--------------------------+
//!    | Title (medium font)      |
//!    | ->Label      =     value | y = 14, small font rows
//!    |   Label      =     value |
//!    |                          |
//!    | B2          B1        B0 | y = 56, option labels
//!    +--------------------------+
//!                          (127,63)
//! ```
//!
//! Screens are built with the cursor operations, titled with
//! [`Ui::new_screen`] and shown with [`Ui::update`].

mod console;
mod dialog;

use menuette_display::{DisplayError, DisplaySurface, FontSize};
use menuette_hal::{ButtonPort, DurableStorage};

use crate::clock::TimeSource;
use crate::config::UiTiming;
use crate::input::Buttons;

pub use console::MAX_FIELD;
pub(crate) use console::{value_field, Field, VALUE_COLUMNS};

/// UI error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiError {
    /// The display surface rejected a drawing operation
    Display(DisplayError),
}

impl From<DisplayError> for UiError {
    fn from(e: DisplayError) -> Self {
        UiError::Display(e)
    }
}

#[derive(Debug, Clone, Copy)]
struct Cursor {
    x: u8,
    y: u8,
    font: FontSize,
}

impl Cursor {
    const HOME: Self = Self {
        x: 0,
        y: 0,
        font: FontSize::Small,
    };
}

/// UI context
pub struct Ui<'a> {
    pub(crate) display: &'a mut dyn DisplaySurface,
    pub(crate) buttons: Buttons<'a>,
    pub(crate) storage: &'a mut dyn DurableStorage,
    pub(crate) timing: UiTiming,
    cursor: Cursor,
}

impl<'a> Ui<'a> {
    pub fn new(
        display: &'a mut dyn DisplaySurface,
        port: &'a dyn ButtonPort,
        clock: &'a dyn TimeSource,
        storage: &'a mut dyn DurableStorage,
        timing: UiTiming,
    ) -> Self {
        Self {
            display,
            buttons: Buttons::new(port, clock, timing.debounce_ms),
            storage,
            timing,
            cursor: Cursor::HOME,
        }
    }

    pub fn buttons(&self) -> &Buttons<'a> {
        &self.buttons
    }

    pub fn storage(&mut self) -> &mut (dyn DurableStorage + 'a) {
        &mut *self.storage
    }

    pub fn display(&mut self) -> &mut (dyn DisplaySurface + 'a) {
        &mut *self.display
    }

    pub fn timing(&self) -> &UiTiming {
        &self.timing
    }
}
