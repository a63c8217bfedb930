//! Test fixtures and constants.

/// Every character a generated secret may contain.
pub const POOL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%&*()_+-=.,";

/// Files and directories created in the scaffold root, sorted.
pub const SCAFFOLD_ENTRIES: &[&str] = &[".env", ".passwords", "docker-compose.yml", "initdb"];

/// Sibling project env file with unrelated settings.
pub const SITE_ENV: &str = "# site settings\nPORT=3000\nDATABASE_URL=\"postgres://stale\"\nSESSION_SECRET=abc\n";

/// Prefix of the generated DATABASE_URL line.
pub const DATABASE_URL_PREFIX: &str = "DATABASE_URL=\"postgresql://app_user:";

/// Suffix of the generated DATABASE_URL line.
pub const DATABASE_URL_SUFFIX: &str = "@127.0.0.1:54322/app_db?schema=app\"";

/// Check that `value` has the shape of a generated secret.
///
/// Segments are located by offset since the pool itself contains '-'.
pub fn is_secret(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();
    chars.len() == 20
        && chars[2] == '-'
        && chars[7] == '-'
        && chars.iter().all(|c| POOL.contains(*c))
}
