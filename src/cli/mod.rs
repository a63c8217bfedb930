//! Command-line interface.

pub mod encode;
pub mod init;
pub mod output;
pub mod secret;
pub mod set_env;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pgscaffold - local PostgreSQL environments with generated credentials.
#[derive(Parser)]
#[command(
    name = "pgscaffold",
    about = "Scaffold a local PostgreSQL development environment",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Working directory to scaffold into
    #[arg(short = 'C', long, global = true, env = "PGSCAFFOLD_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Configuration file, relative to the current directory rather than --dir
    /// (defaults to pgscaffold.toml in the working directory)
    #[arg(long, global = true, env = "PGSCAFFOLD_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate credentials, compose files and init SQL, then export DATABASE_URL
    Init {
        /// Env file receiving DATABASE_URL (relative to the working directory)
        #[arg(long, env = "PGSCAFFOLD_SITE_ENV")]
        site_env: Option<PathBuf>,
        /// Parent hops to the sibling project when --site-env is not given
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=64))]
        levels_up: Option<u8>,
        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print freshly generated secrets
    Secret {
        /// Number of secrets to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Percent-encode a value for use in a connection URL
    Encode {
        /// Value to encode
        value: String,
    },

    /// Set KEY="VALUE" in an env file, creating it if needed
    SetEnv {
        /// Env file to patch
        file: PathBuf,
        /// Variable name
        key: String,
        /// Variable value
        value: String,
    },
}

/// Global options shared by every command.
pub struct Context {
    pub dir: PathBuf,
    pub config: Option<PathBuf>,
}

/// Execute a command.
pub fn execute(command: Command, ctx: Context) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init {
            site_env,
            levels_up,
            json,
        } => init::execute(&ctx, site_env, levels_up, json),
        Secret { count } => secret::execute(count),
        Encode { value } => encode::execute(&value),
        SetEnv { file, key, value } => set_env::execute(&file, &key, &value),
    }
}
