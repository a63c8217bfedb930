//! Scaffold configuration.
//!
//! Every value has a default matching the stock layout, so the file
//! `pgscaffold.toml` is optional and may set any subset of fields.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Values substituted into the generated files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// `COMPOSE_PROJECT_NAME` written to `.env`
    pub project_name: String,
    /// Docker image of the postgres service
    pub image: String,
    /// Container name of the postgres service
    pub container_name: String,
    /// Named volume holding the data directory
    pub volume: String,
    /// Loopback address the port is published on
    pub host: String,
    /// Host port mapped to the container's 5432
    pub port: u16,
    /// Database created for the application
    pub database: String,
    /// Restricted application role
    pub app_user: String,
    /// Schema owned by the application role
    pub schema: String,
    /// Env file receiving `DATABASE_URL`; relative paths resolve against the working directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_env: Option<PathBuf>,
    /// Parent hops to the sibling project when `site_env` is unset
    pub levels_up: usize,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            project_name: "pg_min_papers".to_string(),
            image: "postgres:16-alpine".to_string(),
            container_name: "pg_min_papers".to_string(),
            volume: "papers_pgdata".to_string(),
            host: "127.0.0.1".to_string(),
            port: 54322,
            database: "app_db".to_string(),
            app_user: "app_user".to_string(),
            schema: "app".to_string(),
            site_env: None,
            levels_up: constants::DEFAULT_LEVELS_UP,
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration for a working directory.
    ///
    /// An explicit `path` must exist and is used as given, so a relative one
    /// resolves against the process working directory, not `root`. Without
    /// one, `<root>/pgscaffold.toml` is used when present and defaults
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing (explicit path only),
    /// unreadable, malformed, or fails validation.
    pub fn load(root: &Path, path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()).into());
                }
                p.to_path_buf()
            }
            None => {
                let default = root.join(constants::CONFIG_FILE);
                if !default.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadFile {
            path: path.clone(),
            source,
        })?;

        Self::parse(&contents)
    }

    /// Parse and validate TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` or `ConfigError::Invalid`.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value can be substituted into the templates as-is.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let identifiers = [
            ("project_name", &self.project_name),
            ("container_name", &self.container_name),
            ("volume", &self.volume),
            ("database", &self.database),
            ("app_user", &self.app_user),
            ("schema", &self.schema),
        ];

        for (field, value) in identifiers {
            validate_identifier(field, value)?;
        }

        if self.port == 0 {
            return Err(invalid("port", "must be between 1 and 65535"));
        }

        if self.host.is_empty() || self.host.chars().any(|c| c.is_whitespace()) {
            return Err(invalid("host", "must be non-empty without whitespace"));
        }

        if self.image.is_empty() || self.image.chars().any(|c| c.is_whitespace()) {
            return Err(invalid("image", "must be non-empty without whitespace"));
        }

        if self.levels_up > constants::MAX_LEVELS_UP {
            return Err(invalid(
                "levels_up",
                &format!("must be at most {}", constants::MAX_LEVELS_UP),
            ));
        }

        Ok(())
    }
}

/// Identifiers go unquoted into SQL and YAML, so keep them to `[a-z_][a-z0-9_]*`.
fn validate_identifier(field: &'static str, value: &str) -> Result<()> {
    let mut chars = value.chars();

    match chars.next() {
        None => return Err(invalid(field, "cannot be empty")),
        Some(c) if !(c.is_ascii_lowercase() || c == '_') => {
            return Err(invalid(
                field,
                &format!("'{}' must start with a lowercase letter or underscore", value),
            ));
        }
        _ => {}
    }

    if let Some(c) = chars.find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')) {
        return Err(invalid(
            field,
            &format!("'{}' contains invalid character '{}'", value, c),
        ));
    }

    Ok(())
}

fn invalid(field: &'static str, reason: &str) -> crate::error::Error {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
    .into()
}
