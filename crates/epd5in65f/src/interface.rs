//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for talking to the panel over SPI.
//!
//! ## Hardware Requirements
//!
//! The panel requires:
//! - SPI device (MOSI + SCK + CS), configured as [`SPI_MODE`] at [`SPI_FREQUENCY_HZ`],
//!   most significant bit first
//! - 3 GPIO pins:
//!   - **DC**: Data/Command select (output)
//!   - **RST**: Reset (output, active low)
//!   - **BUSY**: Busy status (input with pull-up)
//!
//! Chip-select is owned by the [`SpiDevice`]: every `write` is one CS frame.
//!
//! ## Example
//!
//! ```rust,ignore
//! use epd5in65f::Interface;
//!
//! let mut interface = Interface::new(spi_device, dc_pin, rst_pin, busy_pin)?;
//!
//! interface.send_command(0x04)?; // Power on
//! interface.send_data(&[0x11, 0x22, 0x33])?;
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin, PinState};
use embedded_hal::spi::{MODE_0, Mode, SpiDevice};

use crate::sequence::{RESET_PULSE_MS, RESET_SETTLE_MS};

/// SPI mode expected by the panel (CPOL = 0, CPHA = 0)
pub const SPI_MODE: Mode = MODE_0;

/// SPI clock the vendor sequence is timed for
pub const SPI_FREQUENCY_HZ: u32 = 4_000_000;

/// Trait for the electrical link to the panel
///
/// [`Display`](crate::display::Display) drives the command protocol through this
/// trait, so tests and unusual wirings can substitute their own implementation.
pub trait DisplayInterface {
    /// Error type for interface operations
    type Error: Debug;

    /// Send a command byte: DC low, then one SPI transaction.
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send data bytes: DC high, then all of `data` in one SPI transaction.
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Pulse RST low and wait for the panel to settle.
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error>;

    /// Sample the BUSY line once.
    fn read_busy(&mut self) -> Result<PinState, Self::Error>;
}

/// Errors that can occur at the interface level
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterfaceError::Spi(e) => write!(f, "SPI error: {e:?}"),
            InterfaceError::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Hardware interface over embedded-hal v1.0 SPI and GPIO traits
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`] (manages CS)
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
/// * `BUSY` - Busy pin implementing [`InputPin`]
pub struct Interface<SPI, DC, RST, BUSY> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
    /// Busy pin
    busy: BUSY,
}

impl<SPI, DC, RST, BUSY, PinErr> Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BUSY: InputPin<Error = PinErr>,
{
    /// Create a new Interface
    ///
    /// Drives RST to its idle (high) level. Nothing is sent to the panel.
    ///
    /// # Errors
    ///
    /// Returns [`InterfaceError::Pin`] if RST cannot be driven.
    pub fn new(
        spi: SPI,
        dc: DC,
        mut rst: RST,
        busy: BUSY,
    ) -> Result<Self, InterfaceError<SPI::Error, PinErr>> {
        rst.set_high().map_err(InterfaceError::Pin)?;
        Ok(Self { spi, dc, rst, busy })
    }

    /// Give back the SPI device and pins
    pub fn release(self) -> (SPI, DC, RST, BUSY) {
        (self.spi, self.dc, self.rst, self.busy)
    }
}

impl<SPI, DC, RST, BUSY, PinErr> DisplayInterface for Interface<SPI, DC, RST, BUSY>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    BUSY: InputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    fn read_busy(&mut self) -> Result<PinState, Self::Error> {
        let high = self.busy.is_high().map_err(InterfaceError::Pin)?;
        Ok(PinState::from(high))
    }
}
