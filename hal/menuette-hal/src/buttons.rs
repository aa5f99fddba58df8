//! Push-button input abstractions
//!
//! The panel has three buttons under the display, numbered 2, 1, 0 from
//! left to right. Their raw state is reported as a 3-bit mask with bit `n`
//! set while button `n` is held down.

use core::cell::RefCell;
use core::ops::BitOr;

use embedded_hal::digital::InputPin;

/// One of the three panel buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Button {
    /// Right button (select / back / OK)
    B0 = 0,
    /// Middle button
    B1 = 1,
    /// Left button
    B2 = 2,
}

impl Button {
    /// All buttons in resolution priority order
    pub const ALL: [Button; 3] = [Button::B0, Button::B1, Button::B2];

    /// Bit index of the button in a [`ButtonMask`]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Create a button from its bit index
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Button::B0),
            1 => Some(Button::B1),
            2 => Some(Button::B2),
            _ => None,
        }
    }

    /// Single-bit mask for this button
    pub const fn mask(self) -> ButtonMask {
        ButtonMask(1 << self as u8)
    }
}

/// Raw button state, bit `n` set while button `n` is pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMask(u8);

impl ButtonMask {
    /// No buttons
    pub const NONE: Self = Self(0);

    /// All three buttons
    pub const ALL: Self = Self(0b111);

    /// Create a mask from raw bits; bits above the third are dropped
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether the button's bit is set
    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.mask().0 != 0
    }

    /// Mask with the button's bit added
    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.mask().0)
    }

    /// Bits set in both masks
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Check if no bit is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Highest-priority button in the mask (B0 > B1 > B2)
    pub fn first(self) -> Option<Button> {
        Button::ALL.into_iter().find(|b| self.contains(*b))
    }
}

impl BitOr for ButtonMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Button> for ButtonMask {
    type Output = Self;

    fn bitor(self, rhs: Button) -> Self {
        self.with(rhs)
    }
}

impl From<Button> for ButtonMask {
    fn from(button: Button) -> Self {
        button.mask()
    }
}

/// Raw button port
///
/// Implementations return the instantaneous, undebounced state. Reads must
/// be cheap and side-effect free; the UI polls this in tight loops.
pub trait ButtonPort {
    /// Read the current button state
    fn read(&self) -> ButtonMask;

    /// Check a single button
    fn is_pressed(&self, button: Button) -> bool {
        self.read().contains(button)
    }
}

impl<T: ButtonPort + ?Sized> ButtonPort for &T {
    fn read(&self) -> ButtonMask {
        (**self).read()
    }
}

/// Three buttons wired to ground with pull-ups enabled
///
/// A low pin level means the button is pressed. A pin that fails to read
/// is reported as released.
pub struct ActiveLowButtons<P0, P1, P2> {
    pins: RefCell<(P0, P1, P2)>,
}

impl<P0, P1, P2> ActiveLowButtons<P0, P1, P2>
where
    P0: InputPin,
    P1: InputPin,
    P2: InputPin,
{
    /// Create the port from the pins for B0, B1 and B2
    pub fn new(b0: P0, b1: P1, b2: P2) -> Self {
        Self {
            pins: RefCell::new((b0, b1, b2)),
        }
    }

    /// Give the pins back
    pub fn release(self) -> (P0, P1, P2) {
        self.pins.into_inner()
    }
}

impl<P0, P1, P2> ButtonPort for ActiveLowButtons<P0, P1, P2>
where
    P0: InputPin,
    P1: InputPin,
    P2: InputPin,
{
    fn read(&self) -> ButtonMask {
        let mut pins = self.pins.borrow_mut();
        let mut mask = ButtonMask::NONE;
        if pin_pressed(&mut pins.0) {
            mask = mask.with(Button::B0);
        }
        if pin_pressed(&mut pins.1) {
            mask = mask.with(Button::B1);
        }
        if pin_pressed(&mut pins.2) {
            mask = mask.with(Button::B2);
        }
        mask
    }
}

fn pin_pressed<P: InputPin>(pin: &mut P) -> bool {
    match pin.is_low() {
        Ok(low) => low,
        Err(_) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("button pin read failed");
            false
        }
    }
}
