use std::process::ExitCode;

use clap::Parser;
use ingestor::config::{ClassifyCli, Config};
use ingestor::pipeline;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cli = ClassifyCli::parse();
    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "configuration error");
            return ExitCode::FAILURE;
        }
    };

    match pipeline::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "classification run failed");
            ExitCode::FAILURE
        }
    }
}
