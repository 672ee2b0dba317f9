//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! ## Example
//!
//! ```
//! use epd5in65f::{Builder, BuilderError};
//!
//! let result = Builder::new().busy_poll_interval_ms(0).build();
//! assert!(matches!(result, Err(BuilderError::ZeroPollInterval)));
//!
//! let result = Builder::new().busy_timeout_ms(Some(0)).build();
//! assert!(matches!(result, Err(BuilderError::ZeroTimeout)));
//! ```

use embedded_hal::digital::PinState;

use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    Interface(I::Error),
    /// BUSY did not reach `level` within the configured budget
    ///
    /// Only returned when [`Builder::busy_timeout_ms`](crate::config::Builder::busy_timeout_ms)
    /// is set. Without it the driver keeps polling.
    BusyTimeout {
        /// Level the driver was waiting for
        level: PinState,
        /// Time spent polling, in milliseconds
        waited_ms: u32,
    },
}

// Requires only `I::Error: Debug`.
impl<I: DisplayInterface> core::fmt::Debug for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => f.debug_tuple("Interface").field(e).finish(),
            Error::BusyTimeout { level, waited_ms } => f
                .debug_struct("BusyTimeout")
                .field("level", level)
                .field("waited_ms", waited_ms)
                .finish(),
        }
    }
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "Interface error: {e:?}"),
            Error::BusyTimeout { level, waited_ms } => {
                let level = match level {
                    PinState::High => "high",
                    PinState::Low => "low",
                };
                write!(f, "BUSY not {level} after {waited_ms} ms")
            }
        }
    }
}

impl<I: DisplayInterface> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Busy poll interval was zero
    ZeroPollInterval,
    /// Busy timeout was `Some(0)`; use `None` to wait forever
    ZeroTimeout,
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BuilderError::ZeroPollInterval => write!(f, "Busy poll interval must be at least 1 ms"),
            BuilderError::ZeroTimeout => {
                write!(f, "Busy timeout must be at least 1 ms (use None to disable)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
