//! Tracing subscriber setup
//!
//! The level comes from `STOCKLINE_LOG_LEVEL` (an `EnvFilter` expression,
//! `error` when unset). The UI owns the terminal, so logs always go to a
//! file: `STOCKLINE_LOG_FILE` when set, otherwise `~/.stockline/stockline.log`.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

pub const LOG_LEVEL_ENV_VAR: &str = "STOCKLINE_LOG_LEVEL";
pub const LOG_FILE_ENV_VAR: &str = "STOCKLINE_LOG_FILE";

/// Log file used when `STOCKLINE_LOG_FILE` is unset, next to the default profile
pub const DEFAULT_LOG_FILE: &str = "~/.stockline/stockline.log";

const DEFAULT_LOG_LEVEL: &str = "error";
const VERBOSE_LOG_LEVEL: &str = "debug";

/// Dependencies that are too chatty below warn
const QUIET_TARGETS: [&str; 6] = ["reqwest", "hyper", "hyper_util", "rustls", "tokio", "mio"];

/// Filter expression to use: the environment wins, then `--verbose`, then the default
pub fn log_level(env_value: Option<String>, verbose: bool) -> String {
    match env_value {
        Some(level) if !level.trim().is_empty() => level.trim().to_lowercase(),
        _ if verbose => VERBOSE_LOG_LEVEL.to_string(),
        _ => DEFAULT_LOG_LEVEL.to_string(),
    }
}

/// Log file to write to: the environment wins, then the default; `~` is expanded
pub fn log_file_path(env_value: Option<String>) -> PathBuf {
    let raw = match env_value {
        Some(path) if !path.trim().is_empty() => path.trim().to_string(),
        _ => DEFAULT_LOG_FILE.to_string(),
    };
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    let mut filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid {LOG_LEVEL_ENV_VAR} value '{level}'"))?;
    for target in QUIET_TARGETS {
        filter = filter.add_directive(format!("{target}=warn").parse()?);
    }
    Ok(filter)
}

/// Install the global subscriber
pub fn init_tracing_subscriber(verbose: bool) -> Result<()> {
    let level = log_level(std::env::var(LOG_LEVEL_ENV_VAR).ok(), verbose);
    let filter = build_filter(&level)?;

    let path = log_file_path(std::env::var(LOG_FILE_ENV_VAR).ok());
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Cannot open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .map_err(anyhow::Error::msg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_should_override_verbose() {
        assert_eq!(log_level(Some("INFO".to_string()), true), "info");
        assert_eq!(log_level(Some("stockline=trace".to_string()), false), "stockline=trace");
    }

    #[test]
    fn verbose_should_raise_default_level() {
        assert_eq!(log_level(None, true), "debug");
        assert_eq!(log_level(Some("  ".to_string()), true), "debug");
        assert_eq!(log_level(None, false), "error");
    }

    #[test]
    fn log_file_should_come_from_environment_when_set() {
        assert_eq!(
            log_file_path(Some("/var/log/stockline.log".to_string())),
            PathBuf::from("/var/log/stockline.log")
        );
        assert_eq!(
            log_file_path(Some("  ./debug.log ".to_string())),
            PathBuf::from("./debug.log")
        );
    }

    #[test]
    fn log_file_should_default_to_profile_directory_not_terminal() {
        for unset in [None, Some(String::new()), Some("   ".to_string())] {
            let path = log_file_path(unset);
            assert!(path.ends_with(".stockline/stockline.log"), "{}", path.display());
            assert!(!path.starts_with("~"), "{}", path.display());
        }
    }

    #[test]
    fn filter_should_accept_directives_and_reject_garbage() {
        assert!(build_filter("debug").is_ok());
        assert!(build_filter("stockline=debug,warn").is_ok());
        assert!(build_filter("stockline=loud").is_err());
    }
}
