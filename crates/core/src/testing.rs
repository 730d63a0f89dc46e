//! Test doubles for the session release seam.
//!
//! [`MockRelease`] implements [`SessionRelease`] without a hosted runtime,
//! recording every invocation so tests can assert on count and timing.
//!
//! # Example
//!
//! ```ignore
//! use nbcut::testing::MockRelease;
//!
//! #[tokio::test(start_paused = true)]
//! async fn releases_once() {
//!     let release = MockRelease::new();
//!     // ... run the scheduler against &release
//!     assert_eq!(release.count(), 1);
//! }
//! ```

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::error::{Error, Result};
use crate::release::SessionRelease;

/// Recording mock for [`SessionRelease`].
///
/// Captures the instant of every `release()` call; uses
/// [`tokio::time::Instant`] so paused-clock tests observe virtual time.
#[derive(Default)]
pub struct MockRelease {
    calls: Mutex<Vec<Instant>>,
    fail_message: Mutex<Option<String>>,
}

impl MockRelease {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `release()` call fail with `message`.
    pub fn fail_with(&self, message: &str) {
        *self.fail_message.lock().unwrap() = Some(message.to_string());
    }

    /// Number of times `release()` was invoked.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Instants at which `release()` was invoked (for timing assertions).
    pub fn calls(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionRelease for MockRelease {
    async fn release(&self) -> Result<()> {
        self.calls.lock().unwrap().push(Instant::now());

        if let Some(message) = self.fail_message.lock().unwrap().clone() {
            return Err(Error::Endpoint {
                status: 500,
                body: message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_each_invocation() {
        let release = MockRelease::new();
        assert_eq!(release.count(), 0);

        release.release().await.unwrap();
        release.release().await.unwrap();

        assert_eq!(release.count(), 2);
        assert_eq!(release.calls().len(), 2);
    }

    #[tokio::test]
    async fn injected_failure_is_returned() {
        let release = MockRelease::new();
        release.fail_with("boom");

        let err = release.release().await.unwrap_err();
        assert!(matches!(err, Error::Endpoint { status: 500, .. }));
        assert_eq!(release.count(), 1);
    }
}
