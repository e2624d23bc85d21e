//! Scaffolding for `roster init`: a config file and an empty roster.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use super::config::{RosterConfig, write_config};
use super::roster_file::write_roster;

/// Options for `init_roster`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing files.
    pub force: bool,
}

/// Which files `init_roster` wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    pub config_written: bool,
    pub roster_written: bool,
}

/// Write `cfg` to `config_path` and an empty roster to `cfg.data_file`.
///
/// Existing files are left alone unless `options.force` is set.
pub fn init_roster(
    config_path: &Path,
    cfg: &RosterConfig,
    options: &InitOptions,
) -> Result<InitReport> {
    cfg.validate()?;
    let config_written = write_if_missing_or_force(config_path, options.force, |path| {
        write_config(path, cfg)
    })?;
    let roster_written = write_if_missing_or_force(&cfg.data_file, options.force, |path| {
        write_roster(path, &[])
    })?;
    Ok(InitReport {
        config_written,
        roster_written,
    })
}

fn write_if_missing_or_force(
    path: &Path,
    force: bool,
    write: impl FnOnce(&Path) -> Result<()>,
) -> Result<bool> {
    if !force && path.exists() {
        debug!(path = %path.display(), "keeping existing file");
        return Ok(false);
    }
    write(path)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::config::load_config;
    use crate::io::roster_file::load_roster;
    use crate::test_support::sample_roster;

    fn config_in(dir: &Path) -> RosterConfig {
        RosterConfig {
            data_file: dir.join("employees.json"),
        }
    }

    #[test]
    fn init_creates_config_and_empty_roster() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config_path = temp.path().join("roster.toml");
        let cfg = config_in(temp.path());

        let report = init_roster(&config_path, &cfg, &InitOptions { force: false }).expect("init");
        assert_eq!(
            report,
            InitReport {
                config_written: true,
                roster_written: true,
            }
        );
        assert_eq!(load_config(&config_path).expect("config"), cfg);
        assert_eq!(load_roster(&cfg.data_file).expect("roster"), Some(Vec::new()));
    }

    #[test]
    fn init_keeps_existing_roster_without_force() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config_path = temp.path().join("roster.toml");
        let cfg = config_in(temp.path());
        write_roster(&cfg.data_file, &sample_roster()).expect("seed");

        let report = init_roster(&config_path, &cfg, &InitOptions { force: false }).expect("init");
        assert!(report.config_written);
        assert!(!report.roster_written);
        assert_eq!(
            load_roster(&cfg.data_file).expect("roster"),
            Some(sample_roster())
        );
    }

    #[test]
    fn init_force_overwrites_roster() {
        let temp = tempfile::tempdir().expect("tempdir");
        let config_path = temp.path().join("roster.toml");
        let cfg = config_in(temp.path());
        write_roster(&cfg.data_file, &sample_roster()).expect("seed");

        init_roster(&config_path, &cfg, &InitOptions { force: true }).expect("init");
        assert_eq!(load_roster(&cfg.data_file).expect("roster"), Some(Vec::new()));
    }
}
