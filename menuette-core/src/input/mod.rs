//! Debounced button input
//!
//! All waits are blocking spin-polls against the raw port and the clock.
//! None of them time out: a stuck button hangs the screen waiting on it.

use menuette_hal::{Button, ButtonMask, ButtonPort};

use crate::clock::TimeSource;

/// Debouncer over a raw button port
pub struct Buttons<'a> {
    port: &'a dyn ButtonPort,
    clock: &'a dyn TimeSource,
    quiet_ms: u32,
}

impl<'a> Buttons<'a> {
    /// `quiet_ms` is the continuous release required before a button counts
    /// as settled
    pub fn new(port: &'a dyn ButtonPort, clock: &'a dyn TimeSource, quiet_ms: u32) -> Self {
        Self {
            port,
            clock,
            quiet_ms,
        }
    }

    /// Raw state of all buttons
    pub fn read(&self) -> ButtonMask {
        self.port.read()
    }

    /// Raw state of one button; does not block
    pub fn test(&self, button: Button) -> bool {
        self.port.read().contains(button)
    }

    pub fn now_ms(&self) -> u32 {
        self.clock.now_ms()
    }

    /// Block until `button` has been released continuously for the quiet
    /// window
    ///
    /// A bounce back to pressed restarts the window.
    pub fn wait_settled(&self, button: Button) {
        while self.test(button) {
            core::hint::spin_loop();
        }
        let mut quiet_since = self.clock.now_ms();
        loop {
            if self.test(button) {
                quiet_since = self.clock.now_ms();
                continue;
            }
            if self.clock.now_ms().wrapping_sub(quiet_since) >= self.quiet_ms {
                return;
            }
        }
    }

    /// Block until `button` is pressed, then until it settles
    pub fn wait_for(&self, button: Button) {
        while !self.test(button) {
            core::hint::spin_loop();
        }
        self.wait_settled(button);
    }

    /// Block until a button in `mask` is pressed and settled
    ///
    /// Simultaneous presses resolve in the order B0, B1, B2 among the masked
    /// buttons. An empty mask returns `None` at once.
    pub fn wait_for_mask(&self, mask: ButtonMask) -> Option<Button> {
        if mask.is_empty() {
            return None;
        }
        loop {
            if let Some(button) = self.read().intersection(mask).first() {
                self.wait_settled(button);
                return Some(button);
            }
        }
    }

    /// Block until any button is pressed and settled
    pub fn wait_any(&self) -> Button {
        loop {
            if let Some(button) = self.read().first() {
                self.wait_settled(button);
                return button;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Sim;

    fn buttons(sim: &Sim) -> Buttons<'_> {
        Buttons::new(sim, sim, 5)
    }

    #[test]
    fn test_is_non_blocking() {
        let sim = Sim::new().press(Button::B1, 0, 100);
        let b = buttons(&sim);
        assert!(b.test(Button::B1));
        assert!(!b.test(Button::B0));
        assert_eq!(sim.now(), 2);
    }

    #[test]
    fn test_settles_after_quiet_window() {
        let sim = Sim::starting_at(99).press(Button::B0, 100, 110);
        buttons(&sim).wait_settled(Button::B0);
        // Released at 110, then at least 5 ms of quiet
        assert!(sim.now() >= 115);
        assert!(sim.now() < 120);
    }

    #[test]
    fn test_bounce_restarts_window() {
        let sim = Sim::starting_at(99)
            .press(Button::B0, 100, 110)
            .press(Button::B0, 112, 113);
        buttons(&sim).wait_settled(Button::B0);
        // Last bounce ends at 113
        assert!(sim.now() >= 118);
    }

    #[test]
    fn test_wait_for_press_and_release() {
        let sim = Sim::new().tap(Button::B2, 40);
        buttons(&sim).wait_for(Button::B2);
        assert!(sim.now() >= 95);
    }

    #[test]
    fn test_mask_priority() {
        let sim = Sim::new()
            .press(Button::B1, 10, 30)
            .press(Button::B2, 10, 30);
        assert_eq!(buttons(&sim).wait_for_mask(ButtonMask::ALL), Some(Button::B1));
    }

    #[test]
    fn test_mask_ignores_unmasked_buttons() {
        let sim = Sim::new()
            .press(Button::B0, 10, 30)
            .press(Button::B2, 10, 30);
        let mask = Button::B1.mask() | Button::B2;
        assert_eq!(buttons(&sim).wait_for_mask(mask), Some(Button::B2));
    }

    #[test]
    fn test_empty_mask_returns_immediately() {
        let sim = Sim::new();
        assert_eq!(buttons(&sim).wait_for_mask(ButtonMask::NONE), None);
        assert_eq!(sim.now(), 0);
    }

    #[test]
    fn test_wait_any() {
        let sim = Sim::new().tap(Button::B2, 20).tap(Button::B0, 20);
        assert_eq!(buttons(&sim).wait_any(), Button::B0);
    }
}
