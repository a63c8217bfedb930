//! Init command - provision the working directory.

use std::path::{Path, PathBuf};

use rand::rngs::OsRng;
use tracing::info;

use crate::cli::{output, Context};
use crate::core::config::ScaffoldConfig;
use crate::core::constants::DATABASE_URL_KEY;
use crate::core::env::Upsert;
use crate::core::fs::normalize;
use crate::core::scaffold::Scaffold;
use crate::error::Result;

/// Run the scaffold in the context's working directory.
pub fn execute(
    ctx: &Context,
    site_env: Option<PathBuf>,
    levels_up: Option<u8>,
    json: bool,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let root = normalize(&cwd.join(&ctx.dir));
    let config_path = ctx.config.as_ref().map(|p| cwd.join(p));
    let mut config = ScaffoldConfig::load(&root, config_path.as_deref())?;

    if let Some(site_env) = site_env {
        config.site_env = Some(site_env);
    }
    if let Some(levels_up) = levels_up {
        config.levels_up = usize::from(levels_up);
    }
    config.validate()?;

    info!(root = %root.display(), "scaffolding");
    if !json {
        output::dimmed(&format!("scaffolding postgres into {}", root.display()));
    }

    let report = Scaffold::new(&root, config).run(&mut OsRng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for dir in &report.dirs {
        output::success(&format!("created {}/", output::path(relative(&root, dir))));
    }
    for file in &report.files {
        output::success(&format!("created {}", output::path(relative(&root, file))));
    }

    output::kv("PG_PASS", format!("\"{}...\"", report.postgres_preview));
    output::kv("app_user", format!("\"{}...\"", report.app_preview));

    let site_env = output::path(report.site_env.display());
    match report.upsert {
        Upsert::Created => output::warn(&format!(
            "{} did not exist, created it with {}",
            site_env,
            output::key(DATABASE_URL_KEY)
        )),
        Upsert::Unchanged => output::dimmed(&format!(
            "{} already up to date in {}",
            DATABASE_URL_KEY, site_env
        )),
        upsert => output::success(&format!(
            "{} {} in {}",
            upsert,
            output::key(DATABASE_URL_KEY),
            site_env
        )),
    }

    output::hint("run `docker compose up -d` to start postgres");
    Ok(())
}

fn relative<'a>(root: &Path, path: &'a Path) -> std::path::Display<'a> {
    path.strip_prefix(root).unwrap_or(path).display()
}
