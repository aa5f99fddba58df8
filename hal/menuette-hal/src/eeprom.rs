//! Durable storage abstractions
//!
//! Provides a byte/word accessor for non-volatile memory (on-chip EEPROM or
//! an emulation of it). Values survive power loss; access may be much
//! slower than RAM.

/// Address of a cell in durable storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StorageAddr(pub u16);

impl StorageAddr {
    /// Create an address
    pub const fn new(addr: u16) -> Self {
        Self(addr)
    }

    /// Address `by` bytes further on
    pub const fn offset(self, by: u16) -> Self {
        Self(self.0.wrapping_add(by))
    }

    /// Address as an index
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Durable storage trait
///
/// Single-cell writes are atomic; there is no transaction support and no
/// fault reporting. Words are stored little-endian in two consecutive
/// bytes.
pub trait DurableStorage {
    /// Read one byte
    fn read_byte(&mut self, addr: StorageAddr) -> u8;

    /// Write one byte
    fn write_byte(&mut self, addr: StorageAddr, value: u8);

    /// Read a 16-bit word
    fn read_word(&mut self, addr: StorageAddr) -> u16 {
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.offset(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Write a 16-bit word
    fn write_word(&mut self, addr: StorageAddr, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(addr.offset(1), hi);
    }
}

impl<T: DurableStorage + ?Sized> DurableStorage for &mut T {
    fn read_byte(&mut self, addr: StorageAddr) -> u8 {
        (**self).read_byte(addr)
    }

    fn write_byte(&mut self, addr: StorageAddr, value: u8) {
        (**self).write_byte(addr, value)
    }

    fn read_word(&mut self, addr: StorageAddr) -> u16 {
        (**self).read_word(addr)
    }

    fn write_word(&mut self, addr: StorageAddr, value: u16) {
        (**self).write_word(addr, value)
    }
}

/// Value of an erased storage cell
pub const ERASED: u8 = 0xFF;

/// RAM-backed durable storage
///
/// Used on targets without EEPROM (values are lost on reset) and for host
/// testing. Out-of-range reads return [`ERASED`]; out-of-range writes are
/// dropped.
#[derive(Debug, Clone)]
pub struct MemoryStorage<const N: usize> {
    cells: [u8; N],
    writes: u32,
}

impl<const N: usize> Default for MemoryStorage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MemoryStorage<N> {
    /// Create an erased storage area
    pub const fn new() -> Self {
        Self {
            cells: [ERASED; N],
            writes: 0,
        }
    }

    /// Create a storage area with the given contents
    pub const fn with_contents(cells: [u8; N]) -> Self {
        Self { cells, writes: 0 }
    }

    /// Raw contents
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Number of byte writes performed so far
    pub fn writes(&self) -> u32 {
        self.writes
    }

    /// Erase everything back to [`ERASED`]
    pub fn erase_all(&mut self) {
        self.cells = [ERASED; N];
    }
}

impl<const N: usize> DurableStorage for MemoryStorage<N> {
    fn read_byte(&mut self, addr: StorageAddr) -> u8 {
        self.cells.get(addr.as_usize()).copied().unwrap_or(ERASED)
    }

    fn write_byte(&mut self, addr: StorageAddr, value: u8) {
        if let Some(cell) = self.cells.get_mut(addr.as_usize()) {
            *cell = value;
            self.writes = self.writes.saturating_add(1);
        }
    }
}
