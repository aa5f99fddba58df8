//! Scrolling menu

use menuette_display::SCREEN_WIDTH;
use menuette_hal::Button;

use super::item::MenuItem;
use super::{visible_rows, ROW_FONT};
use crate::ui::{value_field, Ui, UiError, VALUE_COLUMNS};

/// Left edge of item labels; the highlight arrow sits left of it
const LABEL_X: u8 = 16;

/// Position of the highlight within a menu
///
/// Always `top <= index < top + visible` and `row == index - top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuCursor {
    top: usize,
    index: usize,
    row: usize,
}

impl MenuCursor {
    pub const fn new() -> Self {
        Self {
            top: 0,
            index: 0,
            row: 0,
        }
    }

    /// First item on screen
    pub const fn top(&self) -> usize {
        self.top
    }

    /// Highlighted item
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Screen row of the highlighted item
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Move to the next of `len` items with `visible` rows on screen
    ///
    /// Wraps to the top after the last item. While more items remain
    /// below, the highlight stops one row above the bottom so the next item
    /// is always in view.
    pub fn next(&mut self, len: usize, visible: usize) {
        if len == 0 {
            return;
        }
        if self.index + 1 >= len {
            *self = Self::new();
            return;
        }
        let last_row = visible.max(1) - 1;
        self.index += 1;
        self.row = (self.row + 1).min(last_row);
        if self.row == last_row && last_row > 0 && self.index < len - 1 {
            self.row = last_row - 1;
        }
        self.top = self.index - self.row;
    }

    /// Keep the highlight on screen when the number of rows shrinks
    pub fn fit(&mut self, visible: usize) {
        self.row = self.row.min(visible.max(1) - 1);
        self.top = self.index - self.row;
    }
}

impl Ui<'_> {
    /// Run a menu until the user backs out
    ///
    /// B1 ("DOWN") moves the highlight, B0 ("SEL") runs the item's action or
    /// opens the parameter editor, B2 ("BACK") returns.
    pub fn run_menu(&mut self, title: &str, items: &[MenuItem<'_>]) -> Result<(), UiError> {
        debug!("menu {=str}: {=usize} items", title, items.len());
        let mut cursor = MenuCursor::new();
        loop {
            self.new_screen(Some(title))?;
            let top_y = self.y();
            let visible = visible_rows(top_y);
            cursor.fit(visible);
            self.draw_menu_rows(items, &cursor, top_y, visible)?;

            match self.wait_options(Some("BACK"), Some("DOWN"), Some("SEL"))? {
                Some(Button::B2) => {
                    debug!("menu {=str} closed", title);
                    return Ok(());
                }
                Some(Button::B1) => cursor.next(items.len(), visible),
                Some(Button::B0) => {
                    if let Some(item) = items.get(cursor.index()) {
                        self.select_item(item)?;
                    }
                }
                None => {}
            }
        }
    }

    fn draw_menu_rows(
        &mut self,
        items: &[MenuItem<'_>],
        cursor: &MenuCursor,
        top_y: u8,
        visible: usize,
    ) -> Result<(), UiError> {
        let h = ROW_FONT.height();
        let value_x = SCREEN_WIDTH - VALUE_COLUMNS * ROW_FONT.width();
        let mut y = top_y;
        for (row, item) in items.iter().skip(cursor.top()).take(visible).enumerate() {
            self.str_at(LABEL_X, y, item.label, ROW_FONT)?;
            if item.shows_value() {
                let value = item.read(&mut *self.storage);
                let text = item.render_value(value);
                self.str_at(value_x, y, &value_field(&text), ROW_FONT)?;
            }
            if row == cursor.row() {
                self.str_at(0, y, "->", ROW_FONT)?;
            }
            y = y.saturating_add(h);
        }
        Ok(())
    }

    fn select_item(&mut self, item: &MenuItem<'_>) -> Result<(), UiError> {
        if let Some(action) = item.action {
            debug!("menu action {=str}", item.label);
            action.select(item, self)
        } else if item.storage.is_some() {
            self.edit_parameter(item).map(|_| ())
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::format::{Format, NumText};
    use crate::menu::item::{MenuAction, Storage, ValueRenderer};
    use crate::testing::{fixtures, ui, Sim};
    use proptest::prelude::*;

    struct Count(Cell<u32>);

    impl MenuAction for Count {
        fn select(&self, _item: &MenuItem<'_>, _ui: &mut Ui<'_>) -> Result<(), UiError> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    struct Speed;

    impl ValueRenderer for Speed {
        fn render(&self, _item: &MenuItem<'_>, value: i16) -> NumText {
            NumText::try_from(if value > 0 { "Fast" } else { "Slow" }).unwrap()
        }
    }

    fn presses(len: usize, visible: usize, n: usize) -> MenuCursor {
        let mut cursor = MenuCursor::new();
        for _ in 0..n {
            cursor.next(len, visible);
        }
        cursor
    }

    #[test]
    fn test_scrolls_keeping_next_item_in_view() {
        let at = |n| {
            let c = presses(8, 5, n);
            (c.top(), c.index(), c.row())
        };
        assert_eq!(at(3), (0, 3, 3));
        assert_eq!(at(4), (1, 4, 3));
        assert_eq!(at(5), (2, 5, 3));
        assert_eq!(at(6), (3, 6, 3));
        // Last item may use the bottom row
        assert_eq!(at(7), (3, 7, 4));
        assert_eq!(at(8), (0, 0, 0));
    }

    #[test]
    fn test_single_row() {
        let c = presses(3, 1, 2);
        assert_eq!((c.top(), c.index(), c.row()), (2, 2, 0));
        assert_eq!(presses(3, 1, 3), MenuCursor::new());
    }

    #[test]
    fn test_empty_menu_does_not_move() {
        assert_eq!(presses(0, 5, 3), MenuCursor::new());
    }

    #[test]
    fn test_fit_to_fewer_rows() {
        let mut c = presses(8, 5, 7);
        c.fit(2);
        assert_eq!((c.top(), c.index(), c.row()), (6, 7, 1));
    }

    proptest! {
        #[test]
        fn test_cursor_stays_in_window(len in 1usize..40, visible in 1usize..8, n in 0usize..200) {
            let mut cursor = MenuCursor::new();
            for _ in 0..n {
                let before = cursor.index();
                cursor.next(len, visible);
                prop_assert!(cursor.top() <= cursor.index());
                prop_assert!(cursor.index() < cursor.top() + visible);
                prop_assert_eq!(cursor.row(), cursor.index() - cursor.top());
                if cursor.index() == 0 {
                    prop_assert_eq!(before, len - 1);
                } else {
                    prop_assert_eq!(cursor.index(), before + 1);
                }
            }
        }
    }

    #[test]
    fn test_run_menu_draws_and_dispatches() {
        let level = Cell::new(42i16);
        let fast = Cell::new(1i16);
        let count = Count(Cell::new(0));
        let items = [
            MenuItem::value("Level", Storage::Word(&level), 0, 100, Format::DECIMAL),
            MenuItem::value("Speed", Storage::Word(&fast), 0, 1, Format::DECIMAL)
                .with_renderer(&Speed),
            MenuItem::action("Reset", &count),
            MenuItem::label("v1.0"),
        ];

        let sim = Sim::new()
            .tap(Button::B1, 100)
            .tap(Button::B1, 300)
            .tap(Button::B0, 500)
            .tap(Button::B2, 800);
        let (mut surface, mut storage) = fixtures();
        let mut ui = ui(&mut surface, &sim, &mut storage);
        ui.run_menu("Setup", &items).unwrap();
        drop(ui);

        assert_eq!(count.0.get(), 1);
        assert_eq!(surface.row_text(0).as_str(), "Setup");
        assert_eq!(surface.row_text(14).as_str(), "Level=      42");
        assert_eq!(surface.row_text(22).as_str(), "Speed=    Fast");
        assert_eq!(surface.row_text(30).as_str(), "->Reset");
        assert_eq!(surface.row_text(38).as_str(), "v1.0");
        assert!(surface.row_text(56).contains("DOWN"));
    }

    #[test]
    fn test_label_only_item_is_a_no_op() {
        let items = [MenuItem::label("About")];
        let sim = Sim::new().tap(Button::B0, 100).tap(Button::B2, 300);
        let (mut surface, mut storage) = fixtures();
        let mut ui = ui(&mut surface, &sim, &mut storage);
        ui.run_menu("Info", &items).unwrap();
        drop(ui);
        // Initial draw, redraw after the ignored select
        assert_eq!(surface.presents(), 2);
    }
}
