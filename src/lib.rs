//! TM1638 LED & KEY Driver
//!
//! A driver for the TM1638 LED/key controller as found on the common
//! 8-digit "LED & KEY" boards: eight seven-segment digits, eight LEDs and
//! eight push buttons on a three-wire bus (strobe, clock, data).
//!
//! ## Features
//!
//! - `no_std` compatible, no allocation
//! - `embedded-hal` v1.0 support
//! - ASCII and hex digits through a bounds-checked seven-segment font
//! - Left/right aligned text with decimal-point folding
//! - Integer and two-field number formatting
//! - Blocking or caller-driven sliding text
//! - Single-colour and red/green LEDs
//! - Button scanning
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use tm1638::{Align, Builder, Interface, OpenDrain, Tm1638};
//!
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let strobe = MockPin;
//! # let clock = MockPin;
//! # let data = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(strobe, clock, OpenDrain::new(data));
//! let mut tm = Tm1638::new(interface, Builder::new().build());
//!
//! let _ = tm.begin();
//! let _ = tm.display_text("12.34", Align::Right);
//! let _ = tm.display_sliding_text("HELLO", &mut delay);
//!
//! if let Ok(buttons) = tm.read_buttons() {
//!     // Light the LED above every pressed button
//!     let _ = tm.set_leds(u16::from(buttons));
//! }
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// LED colour types
pub mod color;
/// TM1638 command definitions
pub mod command;
/// Driver configuration types and builder
pub mod config;
/// Core device operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Seven-segment font
pub mod font;
/// Bit-serial bus abstraction
pub mod interface;
/// Text and number rendering
pub mod text;

#[cfg(test)]
mod testing;

pub use color::LedColor;
pub use command::DISPLAY_SIZE;
pub use config::{Brightness, Builder, Config, DEFAULT_SLIDE_DELAY_MS};
pub use display::Tm1638;
pub use error::{BuilderError, Error, MAX_BRIGHTNESS};
pub use interface::{BitOrder, DataLine, Interface, OpenDrain, Transport, shift_in, shift_out};
pub use text::{Align, SlidingText};
