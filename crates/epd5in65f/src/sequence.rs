//! Vendor register tables
//!
//! The panel is configured by a fixed list of register writes. The lists live
//! here as data so they can be reviewed against the vendor reference and
//! checked without any hardware attached. [`Display`](crate::display::Display)
//! replays them through the [`DisplayInterface`](crate::interface::DisplayInterface).

use crate::command::*;
use crate::{HEIGHT, WIDTH};

/// One entry of a register table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Send `command`, then `data` as one data transaction (skipped when empty)
    ///
    /// The vendor reference frames CS around each parameter byte; the bytes
    /// and DC levels on the wire are the same either way.
    Write {
        /// Command opcode
        command: u8,
        /// Parameter bytes following the command
        data: &'static [u8],
    },
    /// Block for the given number of milliseconds
    Delay(u32),
}

const fn write(command: u8, data: &'static [u8]) -> Step {
    Step::Write { command, data }
}

/// Image window size: width then height, each as a big-endian u16
pub const RESOLUTION: [u8; 4] = {
    let w = WIDTH.to_be_bytes();
    let h = HEIGHT.to_be_bytes();
    [w[0], w[1], h[0], h[1]]
};

/// Time RST is held low during a hardware reset
pub const RESET_PULSE_MS: u32 = 1;

/// Settling time after RST is released, before the panel accepts commands
pub const RESET_SETTLE_MS: u32 = 200;

/// Pause between power-off and deep sleep at the end of a frame
pub const POWER_OFF_SETTLE_MS: u32 = 200;

/// Register configuration written after every reset.
///
/// The values are specific to the 600x448 7-color panel and must match the
/// vendor sequence byte for byte.
pub const INIT_SEQUENCE: &[Step] = &[
    write(PANEL_SETTING, &[0xEF, 0x08]),
    write(POWER_SETTING, &[0x37, 0x00, 0x23, 0x23]),
    write(POWER_OFF_SEQUENCE, &[0x00]),
    write(BOOSTER_SOFT_START, &[0xC7, 0xC7, 0x1D]),
    write(PLL_CONTROL, &[0x3C]),
    write(TEMPERATURE_SENSOR, &[0x00]),
    write(VCOM_DATA_INTERVAL, &[0x37]),
    write(TCON_SETTING, &[0x22]),
    write(RESOLUTION_SETTING, &RESOLUTION),
    write(POWER_SAVING, &[0xAA]),
    Step::Delay(100),
    write(VCOM_DATA_INTERVAL, &[0x37]),
];

/// Opens the frame buffer for writing once the registers are configured
pub const BEGIN_SEQUENCE: &[Step] = &[
    write(RESOLUTION_SETTING, &RESOLUTION),
    write(DATA_START_TRANSMISSION, &[]),
];
