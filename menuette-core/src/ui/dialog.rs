//! Option labels and message boxes

use menuette_display::{FontSize, SCREEN_HEIGHT, SCREEN_WIDTH};
use menuette_hal::{Button, ButtonMask};

use super::{Ui, UiError};
use crate::format::wrap_point;

const OPTION_FONT: FontSize = FontSize::Small;

/// Top of the option label row
pub(crate) const OPTION_Y: u8 = SCREEN_HEIGHT - 8;

fn label_len(label: &str) -> u8 {
    u8::try_from(label.len()).unwrap_or(u8::MAX)
}

impl Ui<'_> {
    /// Label the buttons along the bottom row
    ///
    /// `left` sits over B2, `middle` is centered over B1 and `right` is
    /// right-aligned over B0. `None` leaves that slot empty.
    pub fn options(
        &mut self,
        left: Option<&str>,
        middle: Option<&str>,
        right: Option<&str>,
    ) -> Result<(), UiError> {
        let w = OPTION_FONT.width();
        if let Some(label) = right {
            let x = SCREEN_WIDTH.saturating_sub(label_len(label).saturating_mul(w));
            self.str_at(x, OPTION_Y, label, OPTION_FONT)?;
        }
        if let Some(label) = middle {
            let n = label_len(label);
            let mut x = (SCREEN_WIDTH / 2).saturating_sub((n / 2).saturating_mul(w));
            if n % 2 == 1 {
                x = x.saturating_sub(w / 2);
            }
            self.str_at(x, OPTION_Y, label, OPTION_FONT)?;
        }
        if let Some(label) = left {
            self.str_at(0, OPTION_Y, label, OPTION_FONT)?;
        }
        Ok(())
    }

    /// Label the buttons, show the screen and wait for a labeled button
    ///
    /// Unlabeled buttons are ignored. Returns `None` without waiting when no
    /// label is given.
    pub fn wait_options(
        &mut self,
        left: Option<&str>,
        middle: Option<&str>,
        right: Option<&str>,
    ) -> Result<Option<Button>, UiError> {
        self.options(left, middle, right)?;
        self.update()?;

        let mut mask = ButtonMask::NONE;
        if left.is_some() {
            mask = mask.with(Button::B2);
        }
        if middle.is_some() {
            mask = mask.with(Button::B1);
        }
        if right.is_some() {
            mask = mask.with(Button::B0);
        }
        Ok(self.buttons.wait_for_mask(mask))
    }

    /// Show a wrapped message with "OK" over B0 and wait for B0
    ///
    /// Lines break at newlines, then at spaces. Text that runs past the
    /// bottom of the screen is dropped.
    pub fn msg_box(
        &mut self,
        title: Option<&str>,
        message: &str,
        font: FontSize,
    ) -> Result<(), UiError> {
        self.new_screen(title)?;
        let columns = usize::from(font.columns());
        let h = font.height();
        let mut y = self.y();

        let bytes = message.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() && y <= SCREEN_HEIGHT - h {
            let rest = &bytes[pos..];
            let brk = wrap_point(rest, columns);
            self.set_xy(0, y);
            self.put_bytes(&rest[..brk], font)?;
            pos += brk;
            if matches!(bytes.get(pos), Some(b' ' | b'\n')) {
                pos += 1;
            }
            y = y.saturating_add(h);
        }

        let ok_x = SCREEN_WIDTH - 2 * OPTION_FONT.width();
        self.str_at(ok_x, OPTION_Y, "OK", OPTION_FONT)?;
        self.update()?;
        self.buttons.wait_for(Button::B0);
        Ok(())
    }
}
