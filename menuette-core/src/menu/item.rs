//! Menu item descriptors
//!
//! Items are built once, usually as `static`s or on the stack of the screen
//! that runs the menu. They borrow the values they edit and never own them.

use core::cell::Cell;

use menuette_hal::{DurableStorage, StorageAddr};

use crate::format::{to_text, Format, NumText};
use crate::ui::{Ui, UiError};

/// Where an item's value lives
#[derive(Debug, Clone, Copy)]
pub enum Storage<'a> {
    /// Volatile byte
    Byte(&'a Cell<u8>),
    /// Volatile word
    Word(&'a Cell<i16>),
    /// Byte in durable storage
    DurableByte(StorageAddr),
    /// Word in durable storage
    DurableWord(StorageAddr),
}

impl Storage<'_> {
    /// Read the value, widening bytes
    ///
    /// Bytes are sign-extended when `signed`, zero-extended otherwise.
    pub fn get(&self, durable: &mut dyn DurableStorage, signed: bool) -> i16 {
        match *self {
            Storage::Byte(cell) => widen(cell.get(), signed),
            Storage::Word(cell) => cell.get(),
            Storage::DurableByte(addr) => widen(durable.read_byte(addr), signed),
            Storage::DurableWord(addr) => durable.read_word(addr) as i16,
        }
    }

    /// Write the value; byte cells keep the low byte
    pub fn put(&self, durable: &mut dyn DurableStorage, value: i16) {
        match *self {
            Storage::Byte(cell) => cell.set(value as u8),
            Storage::Word(cell) => cell.set(value),
            Storage::DurableByte(addr) => durable.write_byte(addr, value as u8),
            Storage::DurableWord(addr) => durable.write_word(addr, value as u16),
        }
    }

    pub const fn is_durable(&self) -> bool {
        matches!(self, Storage::DurableByte(_) | Storage::DurableWord(_))
    }
}

fn widen(byte: u8, signed: bool) -> i16 {
    if signed {
        i16::from(byte as i8)
    } else {
        i16::from(byte)
    }
}

/// Replaces the default number formatting of an item's value
pub trait ValueRenderer {
    fn render(&self, item: &MenuItem<'_>, value: i16) -> NumText;
}

/// Runs instead of the parameter editor when an item is selected
///
/// The action gets the whole UI and may draw its own screens, wait on
/// buttons and write storage. The menu redraws itself afterwards.
pub trait MenuAction {
    fn select(&self, item: &MenuItem<'_>, ui: &mut Ui<'_>) -> Result<(), UiError>;
}

/// One menu entry
///
/// An item with neither storage nor an action is a plain label and cannot
/// be selected.
#[derive(Clone, Copy)]
pub struct MenuItem<'a> {
    pub label: &'a str,
    pub storage: Option<Storage<'a>>,
    /// Inclusive lower bound after any edit
    pub lower: i16,
    /// Inclusive upper bound after any edit
    pub upper: i16,
    pub format: Format,
    pub renderer: Option<&'a dyn ValueRenderer>,
    pub action: Option<&'a dyn MenuAction>,
}

impl<'a> MenuItem<'a> {
    /// Label-only entry
    pub const fn label(label: &'a str) -> Self {
        Self {
            label,
            storage: None,
            lower: 0,
            upper: 0,
            format: Format::DECIMAL,
            renderer: None,
            action: None,
        }
    }

    /// Editable value within `[lower, upper]`
    pub const fn value(
        label: &'a str,
        storage: Storage<'a>,
        lower: i16,
        upper: i16,
        format: Format,
    ) -> Self {
        Self {
            label,
            storage: Some(storage),
            lower,
            upper,
            format,
            renderer: None,
            action: None,
        }
    }

    /// Entry that runs `action` when selected
    pub const fn action(label: &'a str, action: &'a dyn MenuAction) -> Self {
        Self {
            action: Some(action),
            ..Self::label(label)
        }
    }

    pub const fn with_renderer(self, renderer: &'a dyn ValueRenderer) -> Self {
        Self {
            renderer: Some(renderer),
            ..self
        }
    }

    pub const fn with_action(self, action: &'a dyn MenuAction) -> Self {
        Self {
            action: Some(action),
            ..self
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.storage.is_some() || self.action.is_some()
    }

    /// Whether the menu shows a value column for this item
    pub fn shows_value(&self) -> bool {
        self.storage.is_some() || self.renderer.is_some()
    }

    /// Current value, 0 for items without storage
    pub fn read(&self, durable: &mut dyn DurableStorage) -> i16 {
        self.storage
            .map_or(0, |s| s.get(durable, self.format.is_signed()))
    }

    pub fn write(&self, durable: &mut dyn DurableStorage, value: i16) {
        if let Some(storage) = self.storage {
            storage.put(durable, value);
        }
    }

    /// Text for `value`, through the renderer when there is one
    pub fn render_value(&self, value: i16) -> NumText {
        match self.renderer {
            Some(renderer) => renderer.render(self, value),
            None => to_text(value, self.format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menuette_hal::MemoryStorage;

    struct OnOff;

    impl ValueRenderer for OnOff {
        fn render(&self, _item: &MenuItem<'_>, value: i16) -> NumText {
            NumText::try_from(if value != 0 { "On" } else { "Off" }).unwrap()
        }
    }

    #[test]
    fn test_volatile_byte_widening() {
        let mut durable = MemoryStorage::<8>::new();
        let cell = Cell::new(0xF0u8);
        let storage = Storage::Byte(&cell);
        assert_eq!(storage.get(&mut durable, true), -16);
        assert_eq!(storage.get(&mut durable, false), 240);

        storage.put(&mut durable, 0x1234);
        assert_eq!(cell.get(), 0x34);
    }

    #[test]
    fn test_durable_cells() {
        let mut durable = MemoryStorage::<8>::new();
        let word = Storage::DurableWord(StorageAddr::new(2));
        word.put(&mut durable, -2);
        assert_eq!(durable.as_bytes()[2..4], [0xFE, 0xFF]);
        assert_eq!(word.get(&mut durable, true), -2);

        let byte = Storage::DurableByte(StorageAddr::new(0));
        byte.put(&mut durable, 0x1FF);
        assert_eq!(byte.get(&mut durable, true), -1);
        assert_eq!(byte.get(&mut durable, false), 255);
        assert!(byte.is_durable());
        assert!(!Storage::Word(&Cell::new(0)).is_durable());
    }

    #[test]
    fn test_item_kinds() {
        let cell = Cell::new(5i16);
        let plain = MenuItem::label("About");
        assert!(!plain.is_selectable());
        assert!(!plain.shows_value());

        let value = MenuItem::value("Level", Storage::Word(&cell), 0, 10, Format::DECIMAL);
        assert!(value.is_selectable());
        assert!(value.shows_value());

        let shown = MenuItem::label("Mode").with_renderer(&OnOff);
        assert!(!shown.is_selectable());
        assert!(shown.shows_value());
    }

    #[test]
    fn test_read_uses_format_signedness() {
        let mut durable = MemoryStorage::<8>::new();
        let cell = Cell::new(0xFFu8);
        let signed = MenuItem::value("S", Storage::Byte(&cell), -10, 10, Format::DECIMAL);
        let unsigned = MenuItem::value("U", Storage::Byte(&cell), 0, 255, Format::UNSIGNED);
        assert_eq!(signed.read(&mut durable), -1);
        assert_eq!(unsigned.read(&mut durable), 255);
        assert_eq!(MenuItem::label("L").read(&mut durable), 0);
    }

    #[test]
    fn test_render_value() {
        let cell = Cell::new(0i16);
        let item = MenuItem::value("Fan", Storage::Word(&cell), 0, 1, Format::DECIMAL);
        assert_eq!(item.render_value(1), "1");
        assert_eq!(item.with_renderer(&OnOff).render_value(1), "On");
        assert_eq!(item.with_renderer(&OnOff).render_value(0), "Off");
    }
}
