use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod store;

use cli::Cli;

fn main() -> ExitCode {
    // Initialize tracing; logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("keylist=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut vars = store::load(&cli.store)?;
    let outcome = commands::run(&mut vars, &cli.command)?;

    if outcome.modified {
        store::save(&cli.store, &vars)?;
    }
    if let Some(output) = outcome.output {
        println!("{output}");
    }
    Ok(())
}
