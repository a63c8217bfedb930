//! pgscaffold - local PostgreSQL development environments.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pgscaffold::cli::output;
use pgscaffold::cli::{execute, Cli, Context};
use pgscaffold::error::{ConfigError, EnvError, Error, ScaffoldError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("PGSCAFFOLD_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("pgscaffold=debug")
        } else {
            EnvFilter::new("pgscaffold=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let ctx = Context {
        dir: cli.dir,
        config: cli.config,
    };

    if let Err(e) = execute(cli.command, ctx) {
        let suggestion = match &e {
            Error::Scaffold(ScaffoldError::DirExists(_)) => {
                Some("already scaffolded: remove initdb/ to start over")
            }
            Error::Config(ConfigError::Parse(_) | ConfigError::Invalid { .. }) => {
                Some("check pgscaffold.toml")
            }
            Error::Env(EnvError::Write { .. }) => Some("make sure the env file's directory exists"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
