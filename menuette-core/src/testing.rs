//! Scripted clock and buttons for host tests
//!
//! Every clock read and every button read advances simulated time by one
//! millisecond, so the blocking loops make progress without real time
//! passing. Button presses are scripted as `[from, until)` windows.

use core::cell::Cell;

use heapless::Vec;
use menuette_display::RecordingSurface;
use menuette_hal::{Button, ButtonMask, ButtonPort, MemoryStorage};

use crate::clock::TimeSource;
use crate::config::UiTiming;
use crate::ui::Ui;

/// Simulated time after which a test is assumed to be stuck
const DEFAULT_LIMIT_MS: u32 = 600_000;

#[derive(Debug, Clone, Copy)]
struct Press {
    button: Button,
    from: u32,
    until: u32,
}

pub struct Sim {
    now: Cell<u32>,
    presses: Vec<Press, 32>,
    limit: u32,
}

impl Sim {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(now_ms: u32) -> Self {
        Self {
            now: Cell::new(now_ms),
            presses: Vec::new(),
            limit: now_ms.saturating_add(DEFAULT_LIMIT_MS),
        }
    }

    /// Hold `button` from `from` until just before `until`
    pub fn press(mut self, button: Button, from: u32, until: u32) -> Self {
        self.presses
            .push(Press {
                button,
                from,
                until,
            })
            .expect("too many scripted presses");
        self
    }

    /// Short tap: 50 ms starting at `at`
    pub fn tap(self, button: Button, at: u32) -> Self {
        self.press(button, at, at + 50)
    }

    /// Current simulated time, without advancing it
    pub fn now(&self) -> u32 {
        self.now.get()
    }

    fn step(&self) -> u32 {
        let t = self.now.get() + 1;
        assert!(t <= self.limit, "simulation ran past its script at {t} ms");
        self.now.set(t);
        t
    }
}

impl TimeSource for Sim {
    fn now_ms(&self) -> u32 {
        self.step()
    }
}

impl ButtonPort for Sim {
    fn read(&self) -> ButtonMask {
        let t = self.step();
        self.presses
            .iter()
            .filter(|p| p.from <= t && t < p.until)
            .fold(ButtonMask::NONE, |mask, p| mask | p.button)
    }
}

pub type TestStorage = MemoryStorage<64>;

/// Fresh display and erased storage
pub fn fixtures() -> (RecordingSurface, TestStorage) {
    (RecordingSurface::new(), TestStorage::new())
}

/// Build a UI over the simulator with default timing
pub fn ui<'a>(
    surface: &'a mut RecordingSurface,
    sim: &'a Sim,
    storage: &'a mut TestStorage,
) -> Ui<'a> {
    Ui::new(surface, sim, sim, storage, UiTiming::default())
}
