//! Board-agnostic UI engine for three-button panels
//!
//! This crate contains everything between the raw hardware and the
//! application's menus:
//!
//! - Millisecond clock driven by a timer tick, with a one-shot deferred
//!   callback
//! - Numeric formatter (decimal fixed point, hex, binary, boolean)
//! - Button debouncing and blocking waits
//! - Text console over the display surface (titles, option labels,
//!   message boxes)
//! - Scrolling menu with per-item hooks, parameter editor with
//!   press-and-hold acceleration, live value lists and hex dumps
//! - Timing configuration
//!
//! All screens are modal: they own the display and spin on the buttons
//! until the user leaves them.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod log;

pub mod clock;
pub mod config;
pub mod editor;
pub mod format;
pub mod input;
pub mod menu;
pub mod ui;

#[cfg(test)]
mod testing;

pub use clock::{Clock, DeferredHandler, DeferredStatus, TimeSource};
pub use config::{ClockConfig, ConfigError, UiTiming};
pub use format::{right_justify, to_text, Format, NumText};
pub use input::Buttons;
pub use menu::{ListItem, MenuAction, MenuCursor, MenuItem, Storage, ValueRenderer};
pub use ui::{Ui, UiError};

pub use menuette_display::{DisplayError, DisplaySurface, FontSize};
pub use menuette_hal::{Button, ButtonMask, ButtonPort, DurableStorage, StorageAddr};
