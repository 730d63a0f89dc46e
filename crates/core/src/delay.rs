use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;

/// How long to wait before releasing the compute session.
///
/// `-1` is a reserved sentinel: it disables scheduled disconnection entirely
/// and leaves the session to be released manually. Every other accepted value
/// is a non-negative, finite number of seconds (integer or fractional).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisconnectDelay {
    /// Never disconnect; the session is released by hand.
    Unlimited,
    /// Release the session after this duration elapses.
    After(Duration),
}

impl DisconnectDelay {
    /// Sentinel seconds value selecting [`DisconnectDelay::Unlimited`].
    pub const UNLIMITED_SENTINEL: f64 = -1.0;

    /// Converts raw seconds into a delay.
    ///
    /// Negative values other than the sentinel, NaN and infinities are
    /// rejected; `Duration::try_from_secs_f64` enforces all of them.
    pub fn from_seconds(seconds: f64) -> Result<Self, Error> {
        if seconds == Self::UNLIMITED_SENTINEL {
            return Ok(Self::Unlimited);
        }

        Duration::try_from_secs_f64(seconds)
            .map(Self::After)
            .map_err(|_| Error::InvalidDelay {
                input: seconds.to_string(),
            })
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Self::Unlimited)
    }
}

impl FromStr for DisconnectDelay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let seconds: f64 = s.trim().parse().map_err(|_| Error::InvalidDelay {
            input: s.to_string(),
        })?;
        Self::from_seconds(seconds)
    }
}
