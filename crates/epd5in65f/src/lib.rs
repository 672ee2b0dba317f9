//! Driver for the Waveshare 5.65" 7-color ACeP e-Paper panel (600x448)
//!
//! The panel is driven with a fixed vendor register sequence over SPI plus a
//! DC (data/command) line, an active-low RST line and a BUSY input. A frame is
//! written in three steps:
//!
//! 1. [`Display::begin`] resets the panel, writes the register table and opens
//!    the frame buffer,
//! 2. [`Display::transfer`] streams packed pixels (see [`Color::pack`]),
//! 3. [`Display::end`] refreshes the panel and puts it into deep sleep.
//!
//! ## Example
//!
//! ```rust,ignore
//! use epd5in65f::{Builder, Color, Display, Interface};
//!
//! let interface = Interface::new(spi_device, dc, rst, busy)?;
//! let mut display = Display::new(interface, Builder::new().build()?);
//!
//! display.begin(&mut delay)?;
//! display.fill(Color::White)?;
//! display.end(&mut delay)?;
//! ```
//!
//! BUSY waits block until the panel answers. Set
//! [`Builder::busy_timeout_ms`] to bound them.

#![cfg_attr(not(test), no_std)]

mod color;
mod command;
pub mod config;
mod display;
pub mod error;
pub mod interface;
pub mod sequence;

pub use color::Color;
pub use config::{Builder, Config};
pub use display::{Display, PanelState};
pub use error::{BuilderError, Error};
pub use interface::{DisplayInterface, Interface, InterfaceError, SPI_FREQUENCY_HZ, SPI_MODE};

/// Panel width in pixels
pub const WIDTH: u16 = 600;

/// Panel height in pixels
pub const HEIGHT: u16 = 448;

/// Bytes in one full frame (4 bits per pixel)
pub const BUFFER_SIZE: usize = WIDTH as usize * HEIGHT as usize / 2;
