//! Core device operations

use crate::color::LedColor;
use crate::command::{
    ACTIVATE, BUTTONS_MODE, DISPLAY_OFF, DISPLAY_SIZE, DOT_MASK, REGISTER_COUNT, SEG_ADDR,
    WRITE_INC, WRITE_LOC, brightness_command, led_address, segment_address,
};
use crate::config::{Brightness, Config};
use crate::error::Error;
use crate::font;
use crate::interface::{BitOrder, Transport};

pub(crate) type DisplayResult<I, T = ()> = core::result::Result<T, Error<I>>;

/// Number of bytes clocked in during a key scan
pub const KEY_SCAN_BYTES: u8 = 4;

/// Driver for one TM1638 LED & KEY module
///
/// The chip keeps the digit and LED state; the driver only owns the bus and
/// its configuration. Text and number rendering live in [`crate::text`].
pub struct Tm1638<I>
where
    I: Transport,
{
    /// Bus to the chip
    interface: I,
    /// Driver configuration
    config: Config,
}

impl<I> Tm1638<I>
where
    I: Transport,
{
    /// Create a new driver instance
    ///
    /// Nothing is sent until [`begin`](Self::begin) or a display call.
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Give back the transport
    pub fn release(self) -> I {
        self.interface
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Switch the display on, set the configured brightness and clear it
    pub fn begin(&mut self) -> DisplayResult<I> {
        log::debug!("tm1638: begin, brightness {}", self.config.brightness.level());
        self.interface.data_output().map_err(Error::Interface)?;
        if self.config.activate_on_begin {
            self.send_command(ACTIVATE)?;
        }
        self.set_brightness(self.config.brightness)?;
        self.reset()
    }

    /// Clear every digit and LED
    ///
    /// Streams 16 zero bytes from the first register in auto-increment mode.
    pub fn reset(&mut self) -> DisplayResult<I> {
        self.send_command(WRITE_INC)?;
        self.strobe_low()?;
        self.send_data(SEG_ADDR)?;
        for _ in 0..REGISTER_COUNT {
            self.send_data(0x00)?;
        }
        self.strobe_high()
    }

    /// Set the brightness and store it for [`display_on`](Self::display_on)
    pub fn set_brightness(&mut self, brightness: Brightness) -> DisplayResult<I> {
        log::debug!("tm1638: brightness {}", brightness.level());
        self.config.brightness = brightness;
        self.send_command(brightness_command(brightness.level()))
    }

    /// Blank the display; register contents are kept
    pub fn display_off(&mut self) -> DisplayResult<I> {
        log::debug!("tm1638: display off");
        self.send_command(DISPLAY_OFF)
    }

    /// Light the display again at the stored brightness
    pub fn display_on(&mut self) -> DisplayResult<I> {
        log::debug!("tm1638: display on");
        self.send_command(brightness_command(self.config.brightness.level()))
    }

    /// Write a raw segment byte, `(dp)gfedcba`, to the digit at `position`
    ///
    /// `0b0100_0001` lights segments g and a.
    pub fn display_7seg(&mut self, position: u8, value: u8) -> DisplayResult<I> {
        let position = Self::check_position(position)?;
        self.write_register(segment_address(position), value)
    }

    /// Show an ASCII character at `position`
    pub fn display_ascii(&mut self, position: u8, ascii: u8) -> DisplayResult<I> {
        let position = Self::check_position(position)?;
        let glyph = Self::lookup(ascii)?;
        self.write_register(segment_address(position), glyph)
    }

    /// Show an ASCII character at `position` with its decimal point lit
    pub fn display_ascii_with_dot(&mut self, position: u8, ascii: u8) -> DisplayResult<I> {
        let position = Self::check_position(position)?;
        let glyph = Self::lookup(ascii)?;
        self.write_register(segment_address(position), glyph | DOT_MASK)
    }

    /// Show the low nibble of `hex` at `position` as `0-9`, `A b C d E F`
    pub fn display_hex(&mut self, position: u8, hex: u8) -> DisplayResult<I> {
        self.display_7seg(position, font::hex_glyph(hex))
    }

    /// Write a raw value to the LED at `position`
    ///
    /// 0 is off; on two-colour boards bit 0 is red and bit 1 green.
    pub fn set_led(&mut self, position: u8, value: u8) -> DisplayResult<I> {
        let position = Self::check_position(position)?;
        self.write_register(led_address(position), value)
    }

    /// Set the LED at `position` to a colour
    pub fn set_led_color(&mut self, position: u8, color: LedColor) -> DisplayResult<I> {
        self.set_led(position, color.bits())
    }

    /// Set all eight LEDs from a packed word
    ///
    /// The low byte is the red channel and the high byte the green channel;
    /// bit n of each byte drives LED n. For example `0xE007` lights LEDs 0-2
    /// red and LEDs 5-7 green.
    pub fn set_leds(&mut self, word: u16) -> DisplayResult<I> {
        for position in 0..DISPLAY_SIZE {
            self.set_led(position, LedColor::from_word(word, position).bits())?;
        }
        Ok(())
    }

    /// Scan the buttons
    ///
    /// Returns a mask with bit n set while button n (S1 = bit 0) is pressed.
    /// Buttons are not debounced.
    pub fn read_buttons(&mut self) -> DisplayResult<I, u8> {
        let mut buttons = 0u8;

        self.strobe_low()?;
        self.send_data(BUTTONS_MODE)?;
        self.interface.data_input().map_err(Error::Interface)?;

        // Each scan byte carries two buttons, in bits 0 and 4; shifting by
        // the byte index lines them up as bits i and i + 4.
        for i in 0..KEY_SCAN_BYTES {
            let scan = self
                .interface
                .shift_in(BitOrder::LsbFirst)
                .map_err(Error::Interface)?;
            buttons |= scan << i;
        }

        self.interface.data_output().map_err(Error::Interface)?;
        self.strobe_high()?;
        log::trace!("tm1638: buttons {:#010b}", buttons);
        Ok(buttons)
    }

    /// Send a strobe-framed command byte
    pub fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.strobe_low()?;
        self.send_data(cmd)?;
        self.strobe_high()
    }

    /// Shift one byte out without touching the strobe line
    ///
    /// Callers frame it with the strobe themselves.
    pub fn send_data(&mut self, data: u8) -> DisplayResult<I> {
        self.interface
            .shift_out(BitOrder::LsbFirst, data)
            .map_err(Error::Interface)
    }

    /// Write one register in fixed-address mode
    ///
    /// Sends [`WRITE_LOC`], then address and value inside one strobe pulse.
    pub fn write_register(&mut self, address: u8, value: u8) -> DisplayResult<I> {
        log::trace!("tm1638: write {:#04x} = {:#04x}", address, value);
        self.send_command(WRITE_LOC)?;
        self.strobe_low()?;
        self.send_data(address)?;
        self.send_data(value)?;
        self.strobe_high()
    }

    fn strobe_low(&mut self) -> DisplayResult<I> {
        self.interface.strobe_low().map_err(Error::Interface)
    }

    fn strobe_high(&mut self) -> DisplayResult<I> {
        self.interface.strobe_high().map_err(Error::Interface)
    }

    fn check_position(position: u8) -> DisplayResult<I, u8> {
        if position >= DISPLAY_SIZE {
            log::warn!("tm1638: rejected position {}", position);
            return Err(Error::InvalidPosition { position });
        }
        Ok(position)
    }

    fn lookup(ascii: u8) -> DisplayResult<I, u8> {
        font::glyph(ascii).ok_or_else(|| {
            log::warn!("tm1638: no glyph for {:#04x}", ascii);
            Error::OutOfRangeGlyph { ascii }
        })
    }
}
