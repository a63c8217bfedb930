//! Constants used throughout pgscaffold.
//!
//! Centralizes file names and the fixed pieces of the generated layout.

/// Environment file consumed by docker compose (.env).
pub const ENV_FILE: &str = ".env";

/// Compose definition file name.
pub const COMPOSE_FILE: &str = "docker-compose.yml";

/// Directory mounted as `/docker-entrypoint-initdb.d`.
pub const INITDB_DIR: &str = "initdb";

/// Initialization script inside [`INITDB_DIR`].
pub const INIT_SQL_FILE: &str = "01_init.sql";

/// Clear-text credential backup, written with owner-only permissions.
pub const PASSWORDS_FILE: &str = ".passwords";

/// Optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "pgscaffold.toml";

/// Key upserted into the target project's env file.
pub const DATABASE_URL_KEY: &str = "DATABASE_URL";

/// Directory and file of the sibling project receiving `DATABASE_URL`.
pub const SITE_ENV_PATH: &str = "site/.env";

/// Number of parent hops from the working directory to the sibling project root.
pub const DEFAULT_LEVELS_UP: usize = 2;

/// Upper bound on `levels_up`.
pub const MAX_LEVELS_UP: usize = 64;

/// Mode for files holding clear-text secrets.
pub const SECRET_FILE_MODE: u32 = 0o600;

/// Mode requested for `initdb/` (umask applies).
pub const INITDB_DIR_MODE: u32 = 0o777;
