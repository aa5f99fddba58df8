//! Menuette Hardware Abstraction Layer
//!
//! This crate defines the hardware-facing traits the UI engine consumes.
//! Board support code implements them once; the menu, editor and list
//! screens in `menuette-core` stay the same on every target.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (menus, run loop)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  menuette-core (clock, menus, editor)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ menuette-hal  │       │  menuette-    │
//! │ (this crate)  │       │   display     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`buttons::ButtonPort`] - Raw three-button bitmask
//! - [`eeprom::DurableStorage`] - Byte/word non-volatile storage

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod eeprom;

// Re-export key traits at crate root for convenience
pub use buttons::{ActiveLowButtons, Button, ButtonMask, ButtonPort};
pub use eeprom::{DurableStorage, MemoryStorage, StorageAddr};
