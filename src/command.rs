//! TM1638 command definitions
//!
//! This module defines the command bytes and register addresses understood by
//! the TM1638. Every byte travels LSB first.
//!
//! ## Command Structure
//!
//! A mode command is a frame on its own:
//! 1. Strobe low
//! 2. Command byte
//! 3. Strobe high
//!
//! A register write selects the data mode first, then addresses and writes
//! inside a single strobe pulse:
//! 1. Strobe-framed [`WRITE_LOC`] (or [`WRITE_INC`])
//! 2. Strobe low
//! 3. Address byte ([`segment_address`] or [`led_address`])
//! 4. Value byte (more values follow when auto-incrementing)
//! 5. Strobe high
//!
//! ## Example
//!
//! ```
//! use tm1638::command;
//!
//! // Digit 0 and LED 0 share a register pair
//! assert_eq!(command::segment_address(0), 0xC0);
//! assert_eq!(command::led_address(0), 0xC1);
//! assert_eq!(command::segment_address(7), 0xCE);
//! ```

/// Number of digit positions (and LEDs) on the module
pub const DISPLAY_SIZE: u8 = 8;

/// Number of display registers (one segment and one LED byte per position)
pub const REGISTER_COUNT: u8 = DISPLAY_SIZE * 2;

// Data commands

/// Write display data with auto-incrementing address (0x40)
///
/// Used to stream all 16 registers after a single address byte.
pub const WRITE_INC: u8 = 0x40;

/// Write display data to a fixed address (0x44)
///
/// Each write frame carries one address byte and one value byte.
pub const WRITE_LOC: u8 = 0x44;

/// Read key-scan data (0x42)
///
/// After this byte the chip drives DIO and 4 bytes can be clocked in.
pub const BUTTONS_MODE: u8 = 0x42;

// Display control commands

/// Display on at full pulse width (0x8F)
pub const ACTIVATE: u8 = 0x8F;

/// Display off (0x80)
pub const DISPLAY_OFF: u8 = 0x80;

/// Display on, OR with a brightness level (0x88)
pub const BRIGHTNESS_BASE: u8 = 0x88;

/// Brightness bits inside [`BRIGHTNESS_BASE`] (0x07)
pub const BRIGHTNESS_MASK: u8 = 0x07;

// Addresses

/// Register address of the first digit (0xC0)
pub const SEG_ADDR: u8 = 0xC0;

/// Register address of the first LED (0xC1)
pub const LED_ADDR: u8 = 0xC1;

/// Segment byte bit that lights the decimal point
pub const DOT_MASK: u8 = 0x80;

/// Register address of the digit at `position`
///
/// Positions are not checked here; callers validate them against
/// [`DISPLAY_SIZE`] first.
pub const fn segment_address(position: u8) -> u8 {
    SEG_ADDR + (position << 1)
}

/// Register address of the LED at `position`
pub const fn led_address(position: u8) -> u8 {
    LED_ADDR + (position << 1)
}

/// Display control byte for a brightness level
pub const fn brightness_command(level: u8) -> u8 {
    BRIGHTNESS_BASE | (level & BRIGHTNESS_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_and_led_addresses_interleave() {
        for position in 0..DISPLAY_SIZE {
            assert_eq!(segment_address(position), 0xC0 + position * 2);
            assert_eq!(led_address(position), segment_address(position) + 1);
        }
        assert_eq!(led_address(7), 0xCF);
    }

    #[test]
    fn test_brightness_command_masks_level() {
        assert_eq!(brightness_command(0), 0x88);
        assert_eq!(brightness_command(7), 0x8F);
        assert_eq!(brightness_command(0x0A), 0x8A);
        assert_eq!(brightness_command(7), ACTIVATE);
    }
}
