use std::time::Duration;

use tracing::info;

use crate::delay::DisconnectDelay;
use crate::error::Result;
use crate::release::SessionRelease;

/// What [`schedule_disconnect`] did with the delay it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Unlimited mode; the session was left alone.
    Skipped,
    /// The wait elapsed and the session was released.
    Released,
}

/// Waits out `delay`, then releases the session exactly once.
///
/// [`DisconnectDelay::Unlimited`] returns immediately without touching the
/// session. The wait is a single uninterrupted sleep; there is no cancellation
/// and no retry. A failure from the release capability propagates to the
/// caller untouched.
pub async fn schedule_disconnect(
    delay: DisconnectDelay,
    release: &dyn SessionRelease,
) -> Result<Outcome> {
    let DisconnectDelay::After(wait) = delay else {
        println!("Unlimited mode selected; disconnect the session manually.");
        info!(target = "nbcut.scheduler", "unlimited mode, nothing scheduled");
        return Ok(Outcome::Skipped);
    };

    println!(
        "Disconnecting the compute session in {} seconds...",
        format_seconds(wait)
    );
    info!(
        target = "nbcut.scheduler",
        seconds = wait.as_secs_f64(),
        "disconnect scheduled"
    );

    tokio::time::sleep(wait).await;
    release.release().await?;

    println!("Compute session disconnected.");
    info!(target = "nbcut.scheduler", "session released");
    Ok(Outcome::Released)
}

/// Renders whole seconds without a fractional part ("5", not "5.0").
fn format_seconds(wait: Duration) -> String {
    let seconds = wait.as_secs_f64();
    if seconds.fract() == 0.0 {
        format!("{}", seconds as u64)
    } else {
        format!("{seconds}")
    }
}
