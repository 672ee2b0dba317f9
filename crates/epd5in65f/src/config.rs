//! Driver configuration types and builder

pub use crate::error::BuilderError;

/// Default busy poll interval in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 1;

/// Driver configuration
///
/// Panel geometry and register values are fixed for this panel; only the
/// busy-wait behavior is configurable. Use [`Builder`] to create a Config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Delay between BUSY samples
    pub busy_poll_interval_ms: u32,
    /// Give up waiting for BUSY after this long (`None` waits forever)
    pub busy_timeout_ms: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            busy_poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            busy_timeout_ms: None,
        }
    }
}

/// Builder for constructing driver configuration
///
/// # Example
///
/// ```
/// use epd5in65f::Builder;
///
/// let config = Builder::new()
///     .busy_timeout_ms(Some(30_000))
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.busy_timeout_ms, Some(30_000));
/// assert_eq!(config.busy_poll_interval_ms, 1);
/// ```
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delay between BUSY samples
    pub fn busy_poll_interval_ms(mut self, value: u32) -> Self {
        self.config.busy_poll_interval_ms = value;
        self
    }

    /// Bound every BUSY wait
    ///
    /// The panel never reports failure, so by default a stuck BUSY line blocks
    /// forever. With a timeout the driver returns
    /// [`Error::BusyTimeout`](crate::error::Error::BusyTimeout) instead.
    pub fn busy_timeout_ms(mut self, value: Option<u32>) -> Self {
        self.config.busy_timeout_ms = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::ZeroPollInterval` or `BuilderError::ZeroTimeout`
    /// for zero durations.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.config.busy_poll_interval_ms == 0 {
            return Err(BuilderError::ZeroPollInterval);
        }
        if self.config.busy_timeout_ms == Some(0) {
            return Err(BuilderError::ZeroTimeout);
        }
        Ok(self.config)
    }
}
