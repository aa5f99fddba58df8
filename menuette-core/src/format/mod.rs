//! Number and text formatting
//!
//! All output goes into fixed-capacity `heapless::String`s; nothing here
//! allocates or fails.

mod flags;
mod number;
mod text;

pub use flags::{Format, Major};
pub use number::{right_justify, to_text, NumText, NUM_TEXT_LEN};
pub use text::{
    fixed_i32_text, hms_text, seconds_to_hms, wrap_point, FixedText, Hms, HmsText, MAX_HMS_SECONDS,
};
