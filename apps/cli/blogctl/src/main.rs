use blogctl::app;
use blogctl::cli::Cli;

use std::process::ExitCode;

use clap::Parser;
use log::{Level, error, log_enabled};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match app::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger may be what failed.
            if log_enabled!(Level::Error) {
                error!("{e}");
            } else {
                eprintln!("{e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
