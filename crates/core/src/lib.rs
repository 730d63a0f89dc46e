//! Scheduled disconnection for hosted notebook compute sessions.
//!
//! A hosted runtime keeps a compute session assigned until something releases
//! it. This crate waits out a caller-supplied delay and then releases the
//! session through the runtime's control endpoint, with `-1` reserved to mean
//! "never disconnect, the user will do it by hand".
//!
//! The release call itself sits behind the [`SessionRelease`] trait so the
//! scheduler can be exercised against [`testing::MockRelease`] without a live
//! runtime.

pub mod delay;
pub mod error;
pub mod release;
pub mod scheduler;
pub mod testing;

pub use delay::DisconnectDelay;
pub use error::{Error, Result};
pub use release::{HttpRelease, SessionRelease, SessionStatus};
pub use scheduler::{Outcome, schedule_disconnect};
