use clap::Parser;
use nbcut_cli::{cli::Cli, commands, logging};
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = commands::dispatch(cli).await {
        error!(target = "nbcut", error = %err, "command failed");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
