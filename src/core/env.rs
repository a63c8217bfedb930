//! In-place patching of dotenv-style files.
//!
//! Files are parsed into lines, each either an assignment (`KEY=...`) or
//! anything else (comments, blanks, malformed lines). Only the assignment
//! being upserted is touched; every other line is written back byte for byte.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{EnvError, Result};

/// What [`set_env_var`] did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Upsert {
    /// The file did not exist and was created.
    Created,
    /// An existing assignment was rewritten.
    Updated,
    /// No assignment existed; one was appended.
    Appended,
    /// The file already held exactly this assignment.
    Unchanged,
}

impl fmt::Display for Upsert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Upsert::Created => "created",
            Upsert::Updated => "updated",
            Upsert::Appended => "appended",
            Upsert::Unchanged => "unchanged",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Assignment { key: String, raw: String },
    Other(String),
}

impl Line {
    fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_start();

        if let Some((key, _)) = trimmed.split_once('=') {
            let key = key.trim_end();
            if !key.is_empty() && !key.contains(char::is_whitespace) {
                return Line::Assignment {
                    key: key.to_string(),
                    raw: raw.to_string(),
                };
            }
        }

        Line::Other(raw.to_string())
    }

    fn raw(&self) -> &str {
        match self {
            Line::Assignment { raw, .. } | Line::Other(raw) => raw,
        }
    }

    fn assigns(&self, wanted: &str) -> bool {
        matches!(self, Line::Assignment { key, .. } if key == wanted)
    }
}

/// A dotenv file held as lines, preserving everything it does not modify.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvFile {
    lines: Vec<Line>,
    trailing_newline: bool,
}

impl EnvFile {
    /// Split `content` into lines.
    pub fn parse(content: &str) -> Self {
        if content.is_empty() {
            return Self::default();
        }

        let (body, trailing_newline) = match content.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (content, false),
        };

        Self {
            lines: body.split('\n').map(Line::parse).collect(),
            trailing_newline,
        }
    }

    /// Set `key` to `value`.
    ///
    /// The first line assigning `key` is replaced and any later ones are
    /// dropped. Without a match the assignment is appended as a new line.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::InvalidKey` if `key` could not be read back as a key.
    pub fn upsert(&mut self, key: &str, value: &str) -> Result<Upsert> {
        validate_key(key)?;
        let line = format_assignment(key, value);

        let Some(first) = self.lines.iter().position(|l| l.assigns(key)) else {
            self.lines.push(Line::Assignment {
                key: key.to_string(),
                raw: line,
            });
            self.trailing_newline = true;
            return Ok(Upsert::Appended);
        };

        let before = self.lines.len();
        let mut index = 0;
        self.lines.retain(|l| {
            let keep = index <= first || !l.assigns(key);
            index += 1;
            keep
        });

        let unchanged = self.lines[first].raw() == line && self.lines.len() == before;
        self.lines[first] = Line::Assignment {
            key: key.to_string(),
            raw: line,
        };

        if unchanged {
            Ok(Upsert::Unchanged)
        } else {
            Ok(Upsert::Updated)
        }
    }

    /// Number of lines assigning `key`.
    pub fn count(&self, key: &str) -> usize {
        self.lines.iter().filter(|l| l.assigns(key)).count()
    }
}

impl fmt::Display for EnvFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line.raw())?;
        }
        if self.trailing_newline {
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Upsert `key="value"` into the env file at `path`.
///
/// A missing file is created holding just that line. An existing file is
/// rewritten only when its content changes, through a temporary file renamed
/// over the original with the original permissions. A symlinked `path` is
/// followed, so the file it points at is updated and the link kept.
/// Concurrent writers are not serialized; the last rename wins.
///
/// # Errors
///
/// Returns `EnvError` if the key is invalid or the file cannot be read or
/// written (including a missing parent directory).
pub fn set_env_var(path: &Path, key: &str, value: &str) -> Result<Upsert> {
    validate_key(key)?;

    if !path.exists() {
        let content = format!("{}\n", format_assignment(key, value));
        fs::write(path, content).map_err(|source| EnvError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), key, "created env file");
        return Ok(Upsert::Created);
    }

    let content = fs::read_to_string(path).map_err(|source| EnvError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut env = EnvFile::parse(&content);
    let outcome = env.upsert(key, value)?;
    let patched = env.to_string();

    if patched == content {
        debug!(path = %path.display(), key, "env file already up to date");
        return Ok(Upsert::Unchanged);
    }

    replace_contents(path, &patched).map_err(|source| EnvError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), key, %outcome, "patched env file");
    Ok(outcome)
}

fn replace_contents(path: &Path, content: &str) -> std::io::Result<()> {
    // Rename onto the file a symlink points at, not onto the link itself.
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let permissions = fs::metadata(&target)?.permissions();

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(&target).map_err(|e| e.error)?;

    Ok(())
}

/// Reject keys that would not parse back as the same assignment.
fn validate_key(key: &str) -> Result<()> {
    let reason = if key.is_empty() {
        Some("cannot be empty".to_string())
    } else if let Some(c) = key
        .chars()
        .find(|c| *c == '=' || *c == '#' || c.is_whitespace() || c.is_control())
    {
        Some(format!("invalid character {:?}", c))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(EnvError::InvalidKey {
            key: key.to_string(),
            reason,
        }
        .into()),
        None => Ok(()),
    }
}

fn format_assignment(key: &str, value: &str) -> String {
    format!("{}=\"{}\"", key, escape_env_value(value))
}

fn escape_env_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
