mod disconnect;
mod status;

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        verbose: _,
        endpoint,
        token,
        command,
    } = cli;

    match command {
        Commands::Disconnect { delay_seconds } => {
            disconnect::execute(delay_seconds, &endpoint, token).await
        }
        Commands::Status => status::execute(&endpoint, token).await,
    }
}
