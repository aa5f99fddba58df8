//! 16-bit value to text

use heapless::String;

use super::flags::{Format, Major};

/// Capacity of a formatted number; the longest output is 10 characters
pub const NUM_TEXT_LEN: usize = 12;

/// Formatted number
pub type NumText = String<NUM_TEXT_LEN>;

const TEN_TABLE: [u16; 5] = [1, 10, 100, 1000, 10000];

/// Render `value` as text under `format`
///
/// Never fails and never produces more than 10 characters. Unused modifier
/// bits are ignored.
pub fn to_text(value: i16, format: Format) -> NumText {
    let mut out = NumText::new();
    match format.major() {
        Major::Decimal => decimal(&mut out, value, format),
        Major::Hex => hex(&mut out, value, format),
        Major::Binary => binary(&mut out, value, format),
        Major::Boolean => boolean(&mut out, value, format),
    }
    out
}

/// Pad `text` on the left with spaces to `width` characters
///
/// Text already that long or longer is left alone. The width is capped at
/// the string's capacity.
pub fn right_justify<const N: usize>(text: &mut String<N>, width: usize) {
    let len = text.len();
    let width = width.min(N);
    if len >= width {
        return;
    }
    let mut padded = String::<N>::new();
    for _ in len..width {
        put(&mut padded, ' ');
    }
    // Fits: width <= N
    let _ = padded.push_str(text);
    *text = padded;
}

fn put<const N: usize>(out: &mut String<N>, c: char) {
    // Callers size their buffers for the worst case
    let _ = out.push(c);
}

fn decimal(out: &mut NumText, value: i16, format: Format) {
    let signed = !format.has(Format::UNSIGNED);
    let mut v = value as u16;
    if signed && value < 0 {
        put(out, '-');
        v = value.unsigned_abs();
    } else if format.has(Format::INCLUDE_SIGN) {
        put(out, '+');
    }

    let point = usize::from(format.scale_digits());
    let mut started = format.has(Format::LEADING_ZEROS);
    for (i, &ten) in TEN_TABLE.iter().enumerate().rev() {
        if i == point || i == 0 {
            started = true;
        }
        let digit = v / ten;
        v -= digit * ten;
        if digit != 0 {
            started = true;
        }
        if started {
            // digit < 10 except for the top position, where it is < 7
            put(out, char::from(b'0' + digit as u8));
        }
        if i == point && i != 0 {
            put(out, '.');
        }
    }
}

fn hex_digit(nibble: u8) -> char {
    match nibble {
        0..=9 => char::from(b'0' + nibble),
        _ => char::from(b'A' + nibble - 10),
    }
}

fn hex(out: &mut NumText, value: i16, format: Format) {
    if format.has(Format::HEX_0X) {
        put(out, '0');
        put(out, 'x');
    }
    let v = value as u16;
    let digits = if format.has(Format::from_bits(0x01)) { 2 } else { 4 };
    for shift in (0..digits).rev() {
        put(out, hex_digit(((v >> (shift * 4)) & 0x0F) as u8));
    }
}

fn binary(out: &mut NumText, value: i16, format: Format) {
    if format.has(Format::from_bits(0x01)) {
        put(out, '0');
        put(out, 'b');
    }
    let byte = value as u8;
    for bit in (0..8).rev() {
        put(out, if byte & (1 << bit) != 0 { '1' } else { '0' });
    }
}

fn boolean(out: &mut NumText, value: i16, format: Format) {
    let truth = value as u8 != 0;
    let text = if format.has(Format::from_bits(0x01)) {
        if truth {
            "Yes"
        } else {
            "No"
        }
    } else if format.has(Format::from_bits(0x02)) {
        if truth {
            "T"
        } else {
            "F"
        }
    } else if truth {
        "True"
    } else {
        "False"
    };
    let _ = out.push_str(text);
}
