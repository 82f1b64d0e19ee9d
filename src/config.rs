//! Timing configuration types and builder

pub use crate::error::ConfigError;

/// Default debounce interval in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u8 = 50;
/// Default held threshold in milliseconds.
pub const DEFAULT_HELD_MS: u16 = 1_000;
/// Default idle threshold in milliseconds.
pub const DEFAULT_IDLE_MS: u32 = 60_000;
/// Default double-click window in milliseconds.
pub const DEFAULT_DOUBLE_CLICK_MS: u16 = 250;

/// Timing configuration shared by a class of buttons.
///
/// This struct holds all the time thresholds driving debounce and gesture
/// detection. Use [`Builder`] to create a Config. Buttons polled together in
/// one collection should be constructed from the same Config value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Minimum time a raw reading must stay unchanged before it is accepted
    /// as the stable state. Zero keeps filtering to a single confirming poll.
    pub debounce_ms: u8,
    /// Time a button must stay pressed before it counts as held.
    pub held_ms: u16,
    /// Time a button must stay released before it counts as idle.
    pub idle_ms: u32,
    /// Rolling window in which the four transitions of a double click
    /// (press, release, press, release) must all land.
    pub double_click_ms: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            held_ms: DEFAULT_HELD_MS,
            idle_ms: DEFAULT_IDLE_MS,
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
        }
    }
}

/// Builder for constructing a timing configuration
///
/// # Example
///
/// ```
/// use momentary::Builder;
///
/// let config = Builder::new()
///     .debounce_ms(20)
///     .held_ms(750)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(config.debounce_ms, 20);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debounce interval (max 255ms)
    pub fn debounce_ms(mut self, ms: u8) -> Self {
        self.config.debounce_ms = ms;
        self
    }

    /// Set the held threshold
    pub fn held_ms(mut self, ms: u16) -> Self {
        self.config.held_ms = ms;
        self
    }

    /// Set the idle threshold
    pub fn idle_ms(mut self, ms: u32) -> Self {
        self.config.idle_ms = ms;
        self
    }

    /// Set the double-click window
    pub fn double_click_ms(mut self, ms: u16) -> Self {
        self.config.double_click_ms = ms;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WindowTooShort`] if the double-click window is
    /// shorter than four debounce intervals. Such a window could never
    /// contain the four debounced transitions of a double click, so every
    /// double-click query would be constantly false; rejecting the
    /// configuration up front surfaces the mistake before any button exists.
    pub fn build(self) -> Result<Config, ConfigError> {
        let window = u32::from(self.config.double_click_ms);
        if window < 4 * u32::from(self.config.debounce_ms) {
            return Err(ConfigError::WindowTooShort {
                window_ms: self.config.double_click_ms,
                debounce_ms: self.config.debounce_ms,
            });
        }
        Ok(self.config)
    }
}
