// 5.65" ACeP (7-color) command definitions

// Panel and power configuration
pub const PANEL_SETTING: u8 = 0x00; // Panel setting (resolution select, scan direction)
pub const POWER_SETTING: u8 = 0x01; // Power setting (VGH/VGL, VDH/VDL)
pub const POWER_OFF: u8 = 0x02; // Power off
pub const POWER_OFF_SEQUENCE: u8 = 0x03; // Power off sequence setting
pub const POWER_ON: u8 = 0x04; // Power on
pub const BOOSTER_SOFT_START: u8 = 0x06; // Booster soft start
pub const DEEP_SLEEP: u8 = 0x07; // Deep sleep

// Frame data and refresh
pub const DATA_START_TRANSMISSION: u8 = 0x10; // Start of frame buffer data
pub const DISPLAY_REFRESH: u8 = 0x12; // Display refresh

// Timing and analog settings
pub const PLL_CONTROL: u8 = 0x30; // Frame rate (PLL) control
pub const TEMPERATURE_SENSOR: u8 = 0x41; // Temperature sensor selection
pub const VCOM_DATA_INTERVAL: u8 = 0x50; // VCOM and data interval setting
pub const TCON_SETTING: u8 = 0x60; // Gate/source non-overlap period
pub const RESOLUTION_SETTING: u8 = 0x61; // Image window size
pub const POWER_SAVING: u8 = 0xE3; // Power saving

// Parameter values
pub const DEEP_SLEEP_CHECK: u8 = 0xA5; // Required check code for DEEP_SLEEP
