//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//!
//! The chip never acknowledges anything, so a pin that silently fails to
//! toggle cannot be detected. The only runtime errors are those reported by
//! the HAL and arguments the driver refuses to put on the bus.
//!
//! ## Example
//!
//! ```
//! use tm1638::{Brightness, BuilderError};
//!
//! let result = Brightness::new(9);
//! assert!(matches!(result, Err(BuilderError::InvalidBrightness { level: 9 })));
//! ```

use crate::interface::Transport;

/// Highest brightness level supported by the TM1638
pub const MAX_BRIGHTNESS: u8 = 7;

/// Errors that can occur when interacting with the display
///
/// Generic over the transport type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: Transport> {
    /// Transport error (GPIO)
    ///
    /// Wraps the underlying hardware error from the [`Transport`] implementation.
    Interface(I::Error),
    /// Position outside the 8 digits/LEDs
    ///
    /// Positions run from 0 (leftmost) to 7.
    InvalidPosition {
        /// Position requested
        position: u8,
    },
    /// Character code without a glyph in the seven-segment font
    ///
    /// The font covers ASCII `' '` through `'~'`.
    OutOfRangeGlyph {
        /// Character code requested
        ascii: u8,
    },
}

impl<I: Transport> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::InvalidPosition { position } => {
                write!(f, "Invalid position: {position} (must be 0-7)")
            }
            Self::OutOfRangeGlyph { ascii } => {
                write!(f, "No glyph for character code {ascii:#04x}")
            }
        }
    }
}

impl<I: Transport + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Brightness level above [`MAX_BRIGHTNESS`]
    InvalidBrightness {
        /// Level requested
        level: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidBrightness { level } => {
                write!(f, "Invalid brightness {level} (max {MAX_BRIGHTNESS})")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
