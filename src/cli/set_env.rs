//! Set-env command - upsert one variable into an env file.

use std::path::Path;

use tracing::debug;

use crate::cli::output;
use crate::core::env::{self, Upsert};
use crate::error::Result;

/// Upsert `key` in `file` and report what changed.
pub fn execute(file: &Path, key: &str, value: &str) -> Result<()> {
    debug!(path = %file.display(), key, "set-env");

    let outcome = env::set_env_var(file, key, value)?;
    let target = output::path(file.display());

    match outcome {
        Upsert::Unchanged => output::dimmed(&format!("{} already set in {}", key, target)),
        other => output::success(&format!("{} {} in {}", other, output::key(key), target)),
    }

    Ok(())
}
