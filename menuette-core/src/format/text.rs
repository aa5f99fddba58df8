//! Time, fixed-point and wrapping helpers

use heapless::String;

/// Largest duration [`seconds_to_hms`] represents: 255 hours
pub const MAX_HMS_SECONDS: u32 = 918_000;

/// `hh:mm:ss`
pub type HmsText = String<8>;

/// Sign, ten digits and a point
pub type FixedText = String<16>;

/// Hours, minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hms {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// Split a duration, clamping it to [`MAX_HMS_SECONDS`]
pub fn seconds_to_hms(seconds: u32) -> Hms {
    let t = seconds.min(MAX_HMS_SECONDS);
    Hms {
        hours: (t / 3600) as u8,
        minutes: (t % 3600 / 60) as u8,
        seconds: (t % 60) as u8,
    }
}

/// `hh:mm:ss` with two digits per field; hours above 99 keep the last two
pub fn hms_text(hms: Hms) -> HmsText {
    let mut out = HmsText::new();
    for (i, field) in [hms.hours, hms.minutes, hms.seconds].into_iter().enumerate() {
        if i != 0 {
            let _ = out.push(':');
        }
        let field = field % 100;
        let _ = out.push(char::from(b'0' + field / 10));
        let _ = out.push(char::from(b'0' + field % 10));
    }
    out
}

/// Render a 32-bit fixed-point value with `decimals` digits after the point
///
/// A zero is added before the point when needed; `decimals` above 10 is
/// treated as 10.
pub fn fixed_i32_text(value: i32, decimals: u8) -> FixedText {
    let mut out = FixedText::new();
    if value < 0 {
        let _ = out.push('-');
    }

    let decimals = usize::from(decimals.min(10));
    let mut digits = [0u8; 11];
    let mut count = 0;
    let mut v = value.unsigned_abs();
    while v != 0 {
        digits[count] = (v % 10) as u8;
        v /= 10;
        count += 1;
    }
    count = count.max(decimals + 1);

    for i in (0..count).rev() {
        let _ = out.push(char::from(b'0' + digits[i]));
        if i == decimals && i != 0 {
            let _ = out.push('.');
        }
    }
    out
}

/// Find where to break `text` so the first piece fits in `width` columns
///
/// Everything before the returned index belongs on the current line. A
/// newline inside the window wins; otherwise the whole text if it fits,
/// then the last space at or before `width`, then a hard break at `width`.
pub fn wrap_point(text: &[u8], width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    if let Some(i) = text.iter().take(width).position(|&b| b == b'\n') {
        return i;
    }
    if text.len() <= width {
        return text.len();
    }
    (1..=width)
        .rev()
        .find(|&i| text[i] == b' ')
        .unwrap_or(width)
}
