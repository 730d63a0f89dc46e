use std::io::{self, Write};

use nbcut::{DisconnectDelay, HttpRelease, SessionRelease, schedule_disconnect};
use tracing::warn;

use crate::error::Result;

pub async fn execute(
    delay_seconds: Option<String>,
    endpoint: &str,
    token: Option<String>,
) -> Result<()> {
    let raw = match delay_seconds {
        Some(value) => value,
        None => prompt()?,
    };

    let release = HttpRelease::new(endpoint, token)?;
    run(&raw, &release).await
}

/// Parses the raw seconds value and runs the scheduler against `release`.
///
/// An unparseable or out-of-range value ends the command normally after a
/// user-facing message; the release capability is never touched in that case.
async fn run(raw: &str, release: &dyn SessionRelease) -> Result<()> {
    let delay = match raw.parse::<DisconnectDelay>() {
        Ok(delay) => delay,
        Err(_) => {
            println!("Invalid number of seconds: {raw}. Enter a valid numeric value.");
            warn!(target = "nbcut", input = %raw, "invalid delay input");
            return Ok(());
        }
    };

    schedule_disconnect(delay, release).await?;
    Ok(())
}

fn prompt() -> Result<String> {
    print!("Seconds until disconnect (-1 for unlimited): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
