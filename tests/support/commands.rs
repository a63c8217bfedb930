//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;

impl Test {
    /// Create a pgscaffold command running in the scaffold root.
    ///
    /// Inherited `PGSCAFFOLD_*` variables are cleared and colors disabled so
    /// output is stable.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("pgscaffold").expect("failed to find pgscaffold binary");
        cmd.env_remove("PGSCAFFOLD_DIR")
            .env_remove("PGSCAFFOLD_CONFIG")
            .env_remove("PGSCAFFOLD_SITE_ENV")
            .env_remove("PGSCAFFOLD_LOG")
            .env("NO_COLOR", "1");
        cmd.current_dir(self.root());
        cmd
    }

    /// Shortcut for `pgscaffold init`.
    pub fn init(&self) -> Output {
        self.cmd()
            .arg("init")
            .output()
            .expect("failed to run pgscaffold init")
    }

    /// Shortcut for `pgscaffold init --json`.
    pub fn init_json(&self) -> Output {
        self.cmd()
            .args(["init", "--json"])
            .output()
            .expect("failed to run pgscaffold init --json")
    }

    /// Shortcut for `pgscaffold secret --count <n>`.
    pub fn secret(&self, count: usize) -> Output {
        self.cmd()
            .args(["secret", "--count", &count.to_string()])
            .output()
            .expect("failed to run pgscaffold secret")
    }

    /// Shortcut for `pgscaffold encode`.
    pub fn encode(&self, value: &str) -> Output {
        self.cmd()
            .args(["encode", "--", value])
            .output()
            .expect("failed to run pgscaffold encode")
    }

    /// Shortcut for `pgscaffold set-env`.
    pub fn set_env(&self, file: &Path, key: &str, value: &str) -> Output {
        self.cmd()
            .arg("set-env")
            .arg(file)
            .args([key, value])
            .output()
            .expect("failed to run pgscaffold set-env")
    }
}
