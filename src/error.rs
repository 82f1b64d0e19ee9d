//! Error types for the driver
//!
//! This module defines error types for configuration building
//! ([`ConfigError`]) and button operations ([`Error`]).
//!
//! ## Example
//!
//! ```
//! use momentary::{Builder, ConfigError};
//!
//! // A double-click window too short to ever hold two debounced clicks
//! let result = Builder::new().debounce_ms(100).double_click_ms(250).build();
//! assert!(matches!(result, Err(ConfigError::WindowTooShort { .. })));
//! ```

use crate::interface::InputInterface;

/// Errors that can occur while operating a button
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: InputInterface> {
    /// Pin error (configure or read)
    ///
    /// Wraps the underlying hardware error from the
    /// [`InputInterface`] implementation.
    Pin(I::Error),
}

impl<I: InputInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Pin(e) => write!(f, "pin error: {e:?}"),
        }
    }
}

impl<I: InputInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building a timing configuration
///
/// These errors occur during the builder pattern before any button exists.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The double-click window cannot contain a double click.
    ///
    /// A double click is four debounced transitions inside the window, so the
    /// window must be at least four debounce intervals long. See
    /// [`Builder::build()`](crate::Builder::build).
    WindowTooShort {
        /// Configured double-click window in milliseconds
        window_ms: u16,
        /// Configured debounce interval in milliseconds
        debounce_ms: u8,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::WindowTooShort {
                window_ms,
                debounce_ms,
            } => write!(
                f,
                "double-click window of {window_ms}ms cannot hold two clicks debounced at {debounce_ms}ms"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
