//! Text and number rendering
//!
//! Strings are drawn one character per digit. A `'.'` following a character
//! is folded into that character's decimal point instead of taking a digit
//! of its own, so `"12.50"` fits in four digits.
//!
//! ## Sliding text
//!
//! [`Tm1638::display_sliding_text`] blocks for the whole animation. To drive
//! the animation from your own timer, iterate [`SlidingText`] and draw one
//! frame per tick:
//!
//! ```
//! use tm1638::{Align, SlidingText};
//!
//! let frames: Vec<&[u8]> = SlidingText::new("HELLO").collect();
//! assert_eq!(frames.len(), 5);
//! assert_eq!(frames[0], b"H");
//! assert_eq!(frames[4], b"HELLO");
//! // on every tick: tm.display_bytes(frame, Align::Right)
//! # let _ = Align::Right;
//! ```

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use crate::command::DISPLAY_SIZE;
use crate::display::{DisplayResult, Tm1638};
use crate::interface::Transport;

/// Digits in each half of a nibble display
pub const NIBBLE_SIZE: usize = DISPLAY_SIZE as usize / 2;

/// Formatted text that fits the display
pub type Field = heapless::String<{ DISPLAY_SIZE as usize }>;

/// Where text starts on the display
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Align {
    /// First character on digit 0, filling rightwards
    #[default]
    Left,
    /// Last character on digit 7, filling leftwards
    Right,
}

/// `fmt::Write` sink that silently drops whatever does not fit
struct Truncating<const N: usize>(heapless::String<N>);

impl<const N: usize> Write for Truncating<N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for ch in s.chars() {
            if self.0.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Format an integer for the full display
///
/// With `leading_zeros` the number is zero-padded to 8 digits; otherwise it
/// is left unpadded (`Align::Left`) or space-padded to 8 (`Align::Right`).
/// Anything past 8 characters is cut off.
///
/// ```
/// use tm1638::{Align, text::format_int};
///
/// assert_eq!(format_int(5, true, Align::Left), "00000005");
/// assert_eq!(format_int(5, false, Align::Right), "       5");
/// assert_eq!(format_int(5, false, Align::Left), "5");
/// ```
pub fn format_int(number: u32, leading_zeros: bool, align: Align) -> Field {
    let mut out = Truncating(Field::new());
    // Truncating::write_str never fails
    let _ = match (leading_zeros, align) {
        (true, _) => write!(out, "{:08}", number),
        (false, Align::Left) => write!(out, "{}", number),
        (false, Align::Right) => write!(out, "{:>8}", number),
    };
    out.0
}

/// Format two numbers into the two 4-digit halves of the display
///
/// Each half is zero-padded (`leading_zeros`), left-justified
/// (`Align::Left`) or right-justified (`Align::Right`) to 4 characters and
/// cut off after 4.
///
/// ```
/// use tm1638::{Align, text::format_nibbles};
///
/// assert_eq!(format_nibbles(12, 9, true, Align::Left), "00120009");
/// assert_eq!(format_nibbles(12, 9, false, Align::Left), "12  9   ");
/// assert_eq!(format_nibbles(12, 9, false, Align::Right), "  12   9");
/// ```
pub fn format_nibbles(upper: u16, lower: u16, leading_zeros: bool, align: Align) -> Field {
    let mut out = Truncating(Field::new());
    for number in [upper, lower] {
        let mut half = Truncating(heapless::String::<NIBBLE_SIZE>::new());
        let _ = match (leading_zeros, align) {
            (true, _) => write!(half, "{:04}", number),
            (false, Align::Left) => write!(half, "{:<4}", number),
            (false, Align::Right) => write!(half, "{:>4}", number),
        };
        let _ = out.write_str(&half.0);
    }
    out.0
}

/// Frames of a right-to-left scroll
///
/// Frame `n` is the text up to and including character `n`, limited to the
/// last 8 characters. There are as many frames as characters.
#[derive(Clone, Debug)]
pub struct SlidingText<'a> {
    text: &'a [u8],
    cursor: usize,
}

impl<'a> SlidingText<'a> {
    /// Frames for a string
    pub fn new(text: &'a str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Frames for raw ASCII bytes
    pub fn from_bytes(text: &'a [u8]) -> Self {
        Self { text, cursor: 0 }
    }
}

impl<'a> Iterator for SlidingText<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.text.len() {
            return None;
        }
        let width = (self.cursor + 1).min(DISPLAY_SIZE as usize);
        let start = self.cursor + 1 - width;
        let frame = self.text.get(start..=self.cursor)?;
        self.cursor += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlidingText<'_> {}

impl<I> Tm1638<I>
where
    I: Transport,
{
    /// Show a string, folding dots into the preceding digit
    ///
    /// `"abc.def"` shows as `abcdef` with the decimal point of `c` lit. With
    /// `Align::Right` the string is walked from its end, and a dot folds
    /// into the character before it in that walk order. At most 8 digits
    /// are written; the rest of the string is ignored, and digits that are
    /// not written keep their content.
    ///
    /// Stops with [`Error::OutOfRangeGlyph`](crate::Error::OutOfRangeGlyph)
    /// at the first character the font cannot show.
    pub fn display_text(&mut self, text: &str, align: Align) -> DisplayResult<I> {
        self.display_bytes(text.as_bytes(), align)
    }

    /// Like [`display_text`](Self::display_text), for raw ASCII bytes
    pub fn display_bytes(&mut self, text: &[u8], align: Align) -> DisplayResult<I> {
        match align {
            Align::Left => self.render(text.iter().copied(), align),
            Align::Right => self.render(text.iter().rev().copied(), align),
        }
    }

    fn render(&mut self, chars: impl Iterator<Item = u8>, align: Align) -> DisplayResult<I> {
        let mut chars = chars.peekable();
        let mut rendered = 0u8;

        while rendered < DISPLAY_SIZE {
            let Some(ch) = chars.next() else { break };
            let position = match align {
                Align::Left => rendered,
                Align::Right => DISPLAY_SIZE - 1 - rendered,
            };

            if ch != b'.' && chars.next_if_eq(&b'.').is_some() {
                self.display_ascii_with_dot(position, ch)?;
            } else {
                self.display_ascii(position, ch)?;
            }
            rendered += 1;
        }
        Ok(())
    }

    /// Scroll a string in from the right, blocking until done
    ///
    /// Draws every [`SlidingText`] frame right-aligned and waits
    /// `config.slide_delay_ms` (500 ms by default) after each, so the call
    /// takes `text.len()` frame times.
    pub fn display_sliding_text<D: DelayNs>(
        &mut self,
        text: &str,
        delay: &mut D,
    ) -> DisplayResult<I> {
        let frame_ms = self.config().slide_delay_ms;
        for frame in SlidingText::new(text) {
            self.display_bytes(frame, Align::Right)?;
            delay.delay_ms(frame_ms);
        }
        Ok(())
    }

    /// Show an integer across all 8 digits
    ///
    /// See [`format_int`] for the padding rules. The formatted field is
    /// always drawn from digit 0.
    pub fn display_int_num(
        &mut self,
        number: u32,
        leading_zeros: bool,
        align: Align,
    ) -> DisplayResult<I> {
        let field = format_int(number, leading_zeros, align);
        self.display_text(&field, Align::Left)
    }

    /// Show two numbers (0-9999) on the left and right halves of the display
    ///
    /// See [`format_nibbles`] for the padding rules.
    pub fn display_dec_num_nibble(
        &mut self,
        upper: u16,
        lower: u16,
        leading_zeros: bool,
        align: Align,
    ) -> DisplayResult<I> {
        let field = format_nibbles(upper, lower, leading_zeros, align);
        self.display_text(&field, Align::Left)
    }
}
