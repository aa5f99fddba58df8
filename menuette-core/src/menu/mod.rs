//! Menus, live value lists and memory dumps
//!
//! Every screen here is a blocking modal loop: it owns the display until
//! the user presses the back button.

mod dump;
mod item;
mod list;
mod navigator;

pub use item::{MenuAction, MenuItem, Storage, ValueRenderer};
pub use list::ListItem;
pub use navigator::MenuCursor;

use menuette_display::{FontSize, SCREEN_HEIGHT};

/// Font of every menu, list and dump row
pub(crate) const ROW_FONT: FontSize = FontSize::Small;

/// Rows that fit between `top_y` and the option row, at least one
pub(crate) fn visible_rows(top_y: u8) -> usize {
    let h = ROW_FONT.height();
    let space = SCREEN_HEIGHT.saturating_sub(h).saturating_sub(top_y);
    usize::from(space / h).max(1)
}
