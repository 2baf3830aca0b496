//! Bit-serial bus abstraction
//!
//! This module provides the [`Transport`] trait and the [`Interface`] struct
//! for clocking bytes in and out of the TM1638 over its three-wire bus.
//!
//! ## Hardware Requirements
//!
//! The TM1638 requires 3 GPIO pins:
//! - **STB**: Strobe, frames one bus transaction (output, active low)
//! - **CLK**: Clock, data is latched on the rising edge (output)
//! - **DIO**: Data, bidirectional (output for writes, input for key scan)
//!
//! Most HALs expose a bidirectional pin either as a flex pin that can change
//! direction, or as an open-drain output that can also be read. Implement
//! [`DataLine`] for the former, or wrap the latter in [`OpenDrain`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use tm1638::{BitOrder, Interface, OpenDrain, Transport};
//! # use core::convert::Infallible;
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
//! let mut interface = Interface::new(MockPin, MockPin, OpenDrain::new(MockPin));
//!
//! // One strobe-framed byte
//! let _ = interface.strobe_low();
//! let _ = interface.shift_out(BitOrder::LsbFirst, 0x8F);
//! let _ = interface.strobe_high();
//! ```

use core::fmt::Debug;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, PinState};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Number of clock pulses per transferred byte
pub const BITS_PER_BYTE: u8 = 8;

/// Order in which the bits of a byte travel over the data line
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BitOrder {
    /// Bit 0 first (the TM1638 wire order)
    #[default]
    LsbFirst,
    /// Bit 7 first
    MsbFirst,
}

impl BitOrder {
    /// Mask selecting the bit carried by clock pulse `index` (0..8)
    pub const fn mask(self, index: u8) -> u8 {
        match self {
            Self::LsbFirst => 1 << index,
            Self::MsbFirst => 1 << (BITS_PER_BYTE - 1 - index),
        }
    }
}

/// Clock one byte out on `data`, one bit per clock pulse
///
/// For every bit: clock low, drive the data line, clock high. The chip
/// samples on the rising edge, and the clock is left high afterwards.
pub fn shift_out<D, C, E>(data: &mut D, clock: &mut C, order: BitOrder, byte: u8) -> Result<(), E>
where
    D: OutputPin<Error = E>,
    C: OutputPin<Error = E>,
{
    for i in 0..BITS_PER_BYTE {
        clock.set_low()?;
        data.set_state(PinState::from(byte & order.mask(i) != 0))?;
        clock.set_high()?;
    }
    Ok(())
}

/// Clock one byte in from `data`, sampling after each rising edge
pub fn shift_in<D, C, E>(data: &mut D, clock: &mut C, order: BitOrder) -> Result<u8, E>
where
    D: InputPin<Error = E>,
    C: OutputPin<Error = E>,
{
    let mut value = 0u8;
    for i in 0..BITS_PER_BYTE {
        clock.set_low()?;
        clock.set_high()?;
        if data.is_high()? {
            value |= order.mask(i);
        }
    }
    Ok(value)
}

/// A bidirectional data pin
///
/// The data line is driven by the MCU for commands and display writes, and
/// driven by the chip while the key-scan registers are read out.
pub trait DataLine: InputPin + OutputPin {
    /// Hand the line to the chip so it can be read
    fn set_as_input(&mut self) -> Result<(), Self::Error>;

    /// Take the line back for writing
    fn set_as_output(&mut self) -> Result<(), Self::Error>;
}

/// Adapter turning an open-drain pin into a [`DataLine`]
///
/// An open-drain output released high behaves as an input, so switching to
/// input mode just drives the pin high. Needs an external or module pull-up,
/// which the common LED & KEY boards have.
#[derive(Debug)]
pub struct OpenDrain<P> {
    pin: P,
}

impl<P> OpenDrain<P> {
    /// Wrap an open-drain pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give back the wrapped pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: ErrorType> ErrorType for OpenDrain<P> {
    type Error = P::Error;
}

impl<P: OutputPin> OutputPin for OpenDrain<P> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.pin.set_low()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()
    }
}

impl<P: InputPin> InputPin for OpenDrain<P> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_high()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_low()
    }
}

impl<P: InputPin + OutputPin> DataLine for OpenDrain<P> {
    fn set_as_input(&mut self) -> Result<(), Self::Error> {
        self.pin.set_high()
    }

    fn set_as_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Trait for the bus between the driver and a TM1638
///
/// This trait abstracts over different hardware implementations,
/// allowing [`Tm1638`](crate::display::Tm1638) to work with any
/// set of pins, and to be tested without hardware.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait yourself if the bus is driven some other way (a PIO program, a
/// port expander) or to record traffic in tests.
pub trait Transport {
    /// Error type for bus operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Pull the strobe line low, opening a transaction
    fn strobe_low(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Release the strobe line high, closing a transaction
    fn strobe_high(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Write one byte, 8 clock pulses
    fn shift_out(&mut self, order: BitOrder, byte: u8) -> InterfaceResult<(), Self::Error>;

    /// Read one byte, 8 clock pulses
    fn shift_in(&mut self, order: BitOrder) -> InterfaceResult<u8, Self::Error>;

    /// Switch the data line to input so the chip can drive it
    fn data_input(&mut self) -> InterfaceResult<(), Self::Error>;

    /// Switch the data line back to output
    fn data_output(&mut self) -> InterfaceResult<(), Self::Error>;
}

/// Pin-level bus implementation for the TM1638
///
/// Implements [`Transport`] for embedded-hal v1.0 GPIO traits. All three
/// pins must share one error type, which is the case for every pin of a
/// given HAL.
///
/// ## Type Parameters
///
/// * `STB` - Strobe pin implementing [`OutputPin`]
/// * `CLK` - Clock pin implementing [`OutputPin`]
/// * `DIO` - Data pin implementing [`DataLine`]
pub struct Interface<STB, CLK, DIO> {
    /// Strobe (transaction framing, active low)
    strobe: STB,
    /// Clock (data valid on rising edge)
    clock: CLK,
    /// Bidirectional data line
    data: DIO,
}

impl<STB, CLK, DIO> Interface<STB, CLK, DIO> {
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `strobe` - STB pin (output)
    /// * `clock` - CLK pin (output)
    /// * `data` - DIO pin (bidirectional, see [`DataLine`])
    pub fn new(strobe: STB, clock: CLK, data: DIO) -> Self {
        Self {
            strobe,
            clock,
            data,
        }
    }

    /// Give back the pins as `(strobe, clock, data)`
    pub fn release(self) -> (STB, CLK, DIO) {
        (self.strobe, self.clock, self.data)
    }
}

impl<STB, CLK, DIO, PinErr> Transport for Interface<STB, CLK, DIO>
where
    STB: OutputPin<Error = PinErr>,
    CLK: OutputPin<Error = PinErr>,
    DIO: DataLine<Error = PinErr>,
    PinErr: Debug,
{
    type Error = PinErr;

    fn strobe_low(&mut self) -> InterfaceResult<(), Self::Error> {
        self.strobe.set_low()
    }

    fn strobe_high(&mut self) -> InterfaceResult<(), Self::Error> {
        self.strobe.set_high()
    }

    fn shift_out(&mut self, order: BitOrder, byte: u8) -> InterfaceResult<(), Self::Error> {
        shift_out(&mut self.data, &mut self.clock, order, byte)
    }

    fn shift_in(&mut self, order: BitOrder) -> InterfaceResult<u8, Self::Error> {
        shift_in(&mut self.data, &mut self.clock, order)
    }

    fn data_input(&mut self) -> InterfaceResult<(), Self::Error> {
        self.data.set_as_input()
    }

    fn data_output(&mut self) -> InterfaceResult<(), Self::Error> {
        self.data.set_as_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};

    /// Clock transactions for one byte: low then high, 8 times
    fn clock_byte() -> Vec<PinTransaction> {
        (0..8)
            .flat_map(|_| {
                [
                    PinTransaction::set(State::Low),
                    PinTransaction::set(State::High),
                ]
            })
            .collect()
    }

    fn level(high: bool) -> State {
        if high { State::High } else { State::Low }
    }

    #[test]
    fn test_bit_order_masks() {
        assert_eq!(BitOrder::LsbFirst.mask(0), 0x01);
        assert_eq!(BitOrder::LsbFirst.mask(7), 0x80);
        assert_eq!(BitOrder::MsbFirst.mask(0), 0x80);
        assert_eq!(BitOrder::MsbFirst.mask(7), 0x01);
        assert_eq!(BitOrder::default(), BitOrder::LsbFirst);
    }

    #[test]
    fn test_shift_out_lsb_first() {
        let byte = 0b1000_1101u8;
        let data_expect: Vec<_> = (0..8)
            .map(|i| PinTransaction::set(level(byte & (1 << i) != 0)))
            .collect();
        let mut data = PinMock::new(&data_expect);
        let mut clock = PinMock::new(&clock_byte());

        shift_out(&mut data, &mut clock, BitOrder::LsbFirst, byte).unwrap();

        data.done();
        clock.done();
    }

    #[test]
    fn test_shift_out_msb_first() {
        let byte = 0b1000_1101u8;
        let data_expect: Vec<_> = (0..8)
            .map(|i| PinTransaction::set(level(byte & (1 << (7 - i)) != 0)))
            .collect();
        let mut data = PinMock::new(&data_expect);
        let mut clock = PinMock::new(&clock_byte());

        shift_out(&mut data, &mut clock, BitOrder::MsbFirst, byte).unwrap();

        data.done();
        clock.done();
    }

    #[test]
    fn test_shift_in_lsb_first() {
        // First sampled bit lands in bit 0
        let bits = [true, false, true, true, false, false, false, true];
        let data_expect: Vec<_> = bits.iter().map(|&b| PinTransaction::get(level(b))).collect();
        let mut data = PinMock::new(&data_expect);
        let mut clock = PinMock::new(&clock_byte());

        let value = shift_in(&mut data, &mut clock, BitOrder::LsbFirst).unwrap();
        assert_eq!(value, 0b1000_1101);

        data.done();
        clock.done();
    }

    #[test]
    fn test_shift_in_msb_first() {
        let bits = [true, false, true, true, false, false, false, true];
        let data_expect: Vec<_> = bits.iter().map(|&b| PinTransaction::get(level(b))).collect();
        let mut data = PinMock::new(&data_expect);
        let mut clock = PinMock::new(&clock_byte());

        let value = shift_in(&mut data, &mut clock, BitOrder::MsbFirst).unwrap();
        assert_eq!(value, 0b1011_0001);

        data.done();
        clock.done();
    }

    #[test]
    fn test_interface_strobe_and_direction() {
        let mut strobe = PinMock::new(&[
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ]);
        let mut clock = PinMock::new(&[]);
        // Open-drain input mode releases the line high, output mode is a no-op
        let mut data = PinMock::new(&[PinTransaction::set(State::High)]);

        let mut interface =
            Interface::new(strobe.clone(), clock.clone(), OpenDrain::new(data.clone()));
        interface.strobe_low().unwrap();
        interface.data_input().unwrap();
        interface.data_output().unwrap();
        interface.strobe_high().unwrap();

        strobe.done();
        clock.done();
        data.done();
    }

    #[test]
    fn test_interface_shift_out_drives_data_pin() {
        let mut strobe = PinMock::new(&[]);
        let mut clock = PinMock::new(&clock_byte());
        let data_expect: Vec<_> = (0..8)
            .map(|i| PinTransaction::set(level(0x42u8 & (1 << i) != 0)))
            .collect();
        let mut data = PinMock::new(&data_expect);

        let mut interface =
            Interface::new(strobe.clone(), clock.clone(), OpenDrain::new(data.clone()));
        interface.shift_out(BitOrder::LsbFirst, 0x42).unwrap();

        strobe.done();
        clock.done();
        data.done();
    }

    #[test]
    fn test_release_returns_pins() {
        let interface = Interface::new(1u8, 2u16, 3u32);
        assert_eq!(interface.release(), (1, 2, 3));
    }
}
