//! pgscaffold - local PostgreSQL development environments.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Full provisioning run
//! │   ├── secret        # Print generated secrets
//! │   ├── encode        # Strict percent-encoding
//! │   ├── set_env       # Upsert into an env file
//! │   └── output        # Terminal formatting
//! └── core/             # Core library components
//!     ├── config        # pgscaffold.toml
//!     ├── secret        # Password generation
//!     ├── fs            # File and directory writing
//!     ├── url           # Connection URL encoding
//!     ├── env           # .env patching
//!     ├── templates     # Generated file contents
//!     └── scaffold      # Orchestration
//! ```
//!
//! # Generated layout
//!
//! - `.env` with the superuser password for docker compose
//! - `docker-compose.yml` with one postgres service
//! - `initdb/01_init.sql` creating a restricted application role and schema
//! - `.passwords`, owner-only, with both passwords
//! - `DATABASE_URL` upserted into the sibling project's `site/.env`

pub mod cli;
pub mod core;
pub mod error;
