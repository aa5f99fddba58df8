//! Display surface traits and shared components for Menuette
//!
//! This crate provides:
//! - `DisplaySurface` trait for the pixel-level display driver
//! - `FontSize` with the fixed glyph cell of each font
//! - Screen geometry of the 128x64 panel
//! - `RecordingSurface`, a surface that remembers what was drawn
//! - `GraphicsSurface` (feature `embedded-graphics`), a bridge to any
//!   monochrome `DrawTarget`
//!
//! # Coordinates
//!
//! All coordinates are in pixels with the origin at the top-left corner,
//! x to the right and y down. A glyph is positioned by the top-left corner
//! of its cell. Drivers for panels that scan bottom-up flip y themselves.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
#[cfg(feature = "embedded-graphics")]
pub mod graphics;
pub mod recording;

// Re-export key types
pub use backend::{DisplayError, DisplaySurface, FontSize, SCREEN_HEIGHT, SCREEN_WIDTH};
#[cfg(feature = "embedded-graphics")]
pub use graphics::GraphicsSurface;
pub use recording::{Glyph, RecordingSurface};
