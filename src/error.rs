//! Error types for gateway construction and configuration.
//!
//! The per-frame hooks never fail: unexpected or malformed frames simply do
//! not match and pass through untouched. [`Error`] only surfaces while
//! building frames or loading a [`ForwardConfig`](crate::ForwardConfig).
//!
//! # Example
//!
//! ```
//! use mdps_forward::{CanFrame, Error};
//!
//! match CanFrame::new(0, 593, &[0u8; 12]) {
//!     Err(Error::PayloadTooLong { actual, max }) => {
//!         assert_eq!((actual, max), (12, 8));
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use core::fmt;

/// The configuration field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFault {
    /// The target-command and steering-sensor addresses are identical.
    AddressCollision,
    /// The checksum byte offset does not fall inside an 8-byte payload.
    ChecksumOffset,
    /// The cycle period leaves no room for a rewrite after the baseline.
    CyclePeriod,
    /// The forced output torque does not fit in its 12-bit field.
    OutputTorque,
}

impl fmt::Display for ConfigFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigFault::AddressCollision => {
                "command and steering sensor addresses must differ"
            }
            ConfigFault::ChecksumOffset => "checksum offset must be below 8",
            ConfigFault::CyclePeriod => "cycle period must exceed baseline cycles + 1",
            ConfigFault::OutputTorque => "output torque must fit in 12 bits",
        };
        f.write_str(msg)
    }
}

/// Errors that can occur while building frames or configuring the gateway.
#[derive(Debug)]
pub enum Error {
    /// A classic CAN payload was longer than 8 bytes.
    PayloadTooLong {
        /// Number of bytes supplied
        actual: usize,
        /// Largest payload a classic frame can carry
        max: usize,
    },

    /// A configuration value was rejected by [`ForwardConfig::validate`](crate::ForwardConfig::validate).
    InvalidConfig(ConfigFault),

    /// A JSON configuration document could not be parsed.
    ///
    /// Only available with the `std` feature.
    #[cfg(feature = "std")]
    ConfigParse(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PayloadTooLong { actual, max } => {
                write!(f, "Payload too long: at most {max} bytes, got {actual}")
            }
            Error::InvalidConfig(fault) => write!(f, "Invalid configuration: {fault}"),
            #[cfg(feature = "std")]
            Error::ConfigParse(e) => write!(f, "Configuration parse error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigParse(err)
    }
}

impl From<ConfigFault> for Error {
    fn from(fault: ConfigFault) -> Self {
        Error::InvalidConfig(fault)
    }
}

/// A specialized Result type for gateway setup.
pub type Result<T> = core::result::Result<T, Error>;
