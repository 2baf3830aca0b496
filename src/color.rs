//! LED colours
//!
//! This module defines the [`LedColor`] enum for the LEDs above the digits.
//! Model 1 boards carry single-colour LEDs, model 3 boards carry red/green
//! LEDs driven by two bits of the same register.
//!
//! ## Colour Representation
//!
//! | Colour     | Register value |
//! |------------|----------------|
//! | Off        | 0b00           |
//! | Red        | 0b01           |
//! | Green      | 0b10           |
//! | Red+Green  | 0b11           |
//!
//! Single-colour LEDs light for any value with bit 0 set.
//!
//! ## Packed words
//!
//! [`Tm1638::set_leds`](crate::Tm1638::set_leds) takes all eight LEDs as one
//! `u16`: the low byte is the red channel and the high byte the green
//! channel, bit n of each byte belonging to LED n.
//!
//! ```
//! use tm1638::LedColor;
//!
//! // LED 0 red, LED 1 green, LED 2 both
//! let word = 0b0000_0110_0000_0101;
//! assert_eq!(LedColor::from_word(word, 0), LedColor::Red);
//! assert_eq!(LedColor::from_word(word, 1), LedColor::Green);
//! assert_eq!(LedColor::from_word(word, 2), LedColor::RedGreen);
//! assert_eq!(LedColor::from_word(word, 3), LedColor::Off);
//! ```

use crate::command::DISPLAY_SIZE;

/// Red channel bit of an LED register
pub const RED_LED: u8 = 0x01;

/// Green channel bit of an LED register
pub const GREEN_LED: u8 = 0x02;

/// Colours an LED register can hold
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum LedColor {
    /// LED dark
    #[default]
    Off,
    /// Red channel (or the only channel on single-colour boards)
    Red,
    /// Green channel
    Green,
    /// Both channels
    RedGreen,
}

impl LedColor {
    /// Register value for this colour
    pub const fn bits(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Red => RED_LED,
            Self::Green => GREEN_LED,
            Self::RedGreen => RED_LED | GREEN_LED,
        }
    }

    /// Colour of the LED at `position` in a packed red/green word
    ///
    /// Positions past the last LED read as [`LedColor::Off`].
    pub const fn from_word(word: u16, position: u8) -> Self {
        if position >= DISPLAY_SIZE {
            return Self::Off;
        }
        let red = word & (1 << position) != 0;
        let green = word & (1 << (position + 8)) != 0;
        match (red, green) {
            (false, false) => Self::Off,
            (true, false) => Self::Red,
            (false, true) => Self::Green,
            (true, true) => Self::RedGreen,
        }
    }
}

impl From<LedColor> for u8 {
    fn from(color: LedColor) -> Self {
        color.bits()
    }
}
