//! Core library components.
//!
//! Credential generation, file writing, connection-string encoding, env file
//! patching and the orchestration that ties them together.

pub mod config;
pub mod constants;
pub mod env;
pub mod fs;
pub mod scaffold;
pub mod secret;
pub mod templates;
pub mod url;
