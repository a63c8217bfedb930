//! End-to-end provisioning of a working directory.
//!
//! Nothing here is transactional: the first failure aborts the run and
//! leaves whatever was already written in place.

use std::path::PathBuf;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::config::ScaffoldConfig;
use crate::core::constants;
use crate::core::env::{self, Upsert};
use crate::core::fs::{create_dir, normalize, write_file};
use crate::core::secret::{generate_secret, Secret};
use crate::core::templates;
use crate::core::url::ConnectionUrl;
use crate::error::Result;

/// The two generated passwords.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Superuser password (`POSTGRES_PASSWORD`)
    pub postgres: Secret,
    /// Application role password
    pub app: Secret,
}

impl Credentials {
    /// Draw both secrets from `rng`, superuser first.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            postgres: generate_secret(rng),
            app: generate_secret(rng),
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Files written under the working directory, in write order
    pub files: Vec<PathBuf>,
    /// Directories created
    pub dirs: Vec<PathBuf>,
    /// Env file that received `DATABASE_URL`
    pub site_env: PathBuf,
    /// What happened to it
    pub upsert: Upsert,
    /// First characters of the superuser password
    pub postgres_preview: String,
    /// First characters of the application password
    pub app_preview: String,
}

/// Provisions one working directory.
#[derive(Debug, Clone)]
pub struct Scaffold {
    root: PathBuf,
    config: ScaffoldConfig,
}

impl Scaffold {
    pub fn new(root: impl Into<PathBuf>, config: ScaffoldConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Env file that receives `DATABASE_URL`.
    ///
    /// `site_env` from the config wins (relative to the root); otherwise the
    /// root is walked up `levels_up` times and `site/.env` appended.
    pub fn site_env_path(&self) -> PathBuf {
        let path = match &self.config.site_env {
            Some(explicit) => self.root.join(explicit),
            None => {
                let mut path = self.root.clone();
                for _ in 0..self.config.levels_up {
                    path.push("..");
                }
                path.join(constants::SITE_ENV_PATH)
            }
        };

        normalize(&path)
    }

    /// Generate fresh credentials from `rng` and provision.
    ///
    /// # Errors
    ///
    /// See [`Scaffold::run_with`].
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Report> {
        self.run_with(Credentials::generate(rng))
    }

    /// Provision with the given credentials.
    ///
    /// # Errors
    ///
    /// Fails if `initdb/` already exists, if any file cannot be written, or
    /// if the target env file cannot be patched.
    pub fn run_with(&self, credentials: Credentials) -> Result<Report> {
        let Credentials { postgres, app } = credentials;
        let config = &self.config;
        info!(root = %self.root.display(), "starting scaffold");

        let initdb = self.root.join(constants::INITDB_DIR);
        create_dir(&initdb)?;

        let outputs = [
            (
                self.root.join(constants::ENV_FILE),
                templates::dotenv(config, &postgres),
                false,
            ),
            (
                self.root.join(constants::COMPOSE_FILE),
                templates::docker_compose(config),
                false,
            ),
            (
                initdb.join(constants::INIT_SQL_FILE),
                templates::init_sql(config, &app),
                false,
            ),
            (
                self.root.join(constants::PASSWORDS_FILE),
                templates::passwords(&postgres, &app),
                true,
            ),
        ];

        let mut files = Vec::with_capacity(outputs.len());
        for (path, content, restricted) in outputs {
            write_file(&path, &content, restricted)?;
            files.push(path);
        }

        let postgres_preview = postgres.preview();
        let app_preview = app.preview();

        let site_env = self.site_env_path();
        debug!(path = %site_env.display(), "resolved target env file");

        let url = ConnectionUrl::for_app(config, app);
        let upsert = env::set_env_var(&site_env, constants::DATABASE_URL_KEY, &url.render())?;

        info!(files = files.len(), %upsert, "scaffold complete");

        Ok(Report {
            files,
            dirs: vec![initdb],
            site_env,
            upsert,
            postgres_preview,
            app_preview,
        })
    }
}
