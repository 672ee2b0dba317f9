//! Core display operations

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;

use crate::BUFFER_SIZE;
use crate::color::Color;
use crate::command::*;
use crate::config::Config;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::sequence::{BEGIN_SEQUENCE, INIT_SEQUENCE, POWER_OFF_SETTLE_MS, Step};

/// Bytes streamed per transaction by [`Display::fill`]
const FILL_CHUNK: usize = 64;

/// Where the panel is in its power cycle, as far as the driver knows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    /// Constructed, never initialized
    Uninitialized,
    /// Registers configured and frame buffer open for writing
    Ready,
    /// Refreshed and in deep sleep; needs [`Display::begin`] again
    Asleep,
}

/// Driver for the 600x448 7-color panel
///
/// A frame is drawn with [`begin`](Self::begin), one or more
/// [`transfer`](Self::transfer) calls, then [`end`](Self::end).
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Driver configuration
    config: Config,
    /// Last known panel state
    state: PanelState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance. Nothing is sent to the panel.
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            state: PanelState::Uninitialized,
        }
    }

    /// Reset and configure the panel, then open the frame buffer for writing
    pub fn begin<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        log::debug!("begin frame (panel was {:?})", self.state);
        self.init(delay)?;
        self.run(BEGIN_SEQUENCE, delay)?;
        self.state = PanelState::Ready;
        Ok(())
    }

    /// Hardware reset followed by the register table
    fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        log::debug!("hardware reset");
        self.interface.reset(delay).map_err(Error::Interface)?;
        self.wait_for_busy(PinState::High, delay)?;
        self.run(INIT_SEQUENCE, delay)
    }

    /// Stream frame buffer bytes as a single data transaction
    ///
    /// The length is not checked; a full frame is [`BUFFER_SIZE`] bytes and
    /// may be split across any number of calls.
    pub fn transfer(&mut self, data: &[u8]) -> Result<(), Error<I>> {
        if self.state != PanelState::Ready {
            log::warn!("transfer while panel is {:?}", self.state);
        }
        log::trace!("transfer {} bytes", data.len());
        self.send_data(data)
    }

    /// Stream a whole frame of one color without a frame buffer
    pub fn fill(&mut self, color: Color) -> Result<(), Error<I>> {
        let chunk = [color.byte(); FILL_CHUNK];
        let mut remaining = BUFFER_SIZE;
        while remaining > 0 {
            let n = remaining.min(FILL_CHUNK);
            self.transfer(&chunk[..n])?;
            remaining -= n;
        }
        Ok(())
    }

    /// Refresh the panel with the transferred frame and put it to sleep
    pub fn end<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        log::debug!("refresh and sleep");
        self.send_command(POWER_ON)?;
        self.wait_for_busy(PinState::High, delay)?;

        self.send_command(DISPLAY_REFRESH)?;
        self.wait_for_busy(PinState::High, delay)?;

        self.send_command(POWER_OFF)?;
        self.wait_for_busy(PinState::Low, delay)?;
        delay.delay_ms(POWER_OFF_SETTLE_MS);

        self.send_command(DEEP_SLEEP)?;
        self.send_data(&[DEEP_SLEEP_CHECK])?;

        self.state = PanelState::Asleep;
        Ok(())
    }

    /// Draw one complete frame: [`begin`](Self::begin), [`transfer`](Self::transfer), [`end`](Self::end)
    pub fn show<D: DelayNs>(&mut self, frame: &[u8], delay: &mut D) -> Result<(), Error<I>> {
        self.begin(delay)?;
        self.transfer(frame)?;
        self.end(delay)
    }

    /// Replay a register table
    fn run<D: DelayNs>(&mut self, steps: &[Step], delay: &mut D) -> Result<(), Error<I>> {
        for step in steps {
            match *step {
                Step::Write { command, data } => {
                    self.send_command(command)?;
                    if !data.is_empty() {
                        self.send_data(data)?;
                    }
                }
                Step::Delay(ms) => delay.delay_ms(ms),
            }
        }
        Ok(())
    }

    /// Poll BUSY until it reads `level`
    ///
    /// Blocks forever unless a timeout is configured. With one, the final
    /// delay is shortened so the total wait never exceeds the budget.
    fn wait_for_busy<D: DelayNs>(
        &mut self,
        level: PinState,
        delay: &mut D,
    ) -> Result<(), Error<I>> {
        log::trace!("waiting for BUSY {level:?}");
        let interval = self.config.busy_poll_interval_ms;
        let mut waited_ms: u32 = 0;

        loop {
            if self.interface.read_busy().map_err(Error::Interface)? == level {
                return Ok(());
            }
            let step = match self.config.busy_timeout_ms {
                Some(timeout) if waited_ms >= timeout => {
                    log::warn!("BUSY stuck, gave up waiting for {level:?} after {waited_ms} ms");
                    return Err(Error::BusyTimeout { level, waited_ms });
                }
                // last poll lands exactly on the budget
                Some(timeout) => interval.min(timeout - waited_ms),
                None => interval,
            };
            delay.delay_ms(step);
            waited_ms = waited_ms.saturating_add(step);
        }
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> Result<(), Error<I>> {
        log::trace!("command {cmd:#04x}");
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> Result<(), Error<I>> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Last known panel state
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }
}
