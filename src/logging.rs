use crate::config::{Config, DebugLogRotation};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "start341-debug.log";
const DEFAULT_FILTER: &str = "start341=info,warn";
const DEBUG_FILTER: &str = "start341=debug,warn";

/// Keeps the non-blocking file writer flushing; hold it for the process lifetime
#[allow(dead_code)]
pub struct LogGuard(WorkerGuard);

/// Install the global tracing subscriber.
///
/// Without `debug`, logs go to stderr. With `debug`, they go to a file
/// (default `<config dir>/start341/start341-debug.log`). `RUST_LOG` overrides
/// the default filter either way.
pub fn init(config: &Config) -> Result<Option<LogGuard>> {
    if !config.debug {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(DEFAULT_FILTER))
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .ok(); // Already initialized (e.g. in tests)
        return Ok(None);
    }

    let base = resolve_log_path(config.debug_log_path.as_deref())?;
    let rotation = config.debug_log_rotation.unwrap_or(DebugLogRotation::None);

    let (writer, guard) = match rotation {
        DebugLogRotation::None => {
            ensure_parent_dir(&base)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&base)
                .with_context(|| format!("Failed to open log file: {}", base.display()))?;
            tracing_appender::non_blocking(file)
        }
        DebugLogRotation::Daily => {
            let (dir, base_name) = split_dir_and_name(&base)?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            prune_daily_logs(&dir, &base_name, config.debug_log_keep.unwrap_or(7))?;

            tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, &base_name))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEBUG_FILTER))
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer)
        .try_init()
        .ok();

    tracing::info!(log_file = %base.display(), rotation = ?rotation, "debug logging enabled");

    Ok(Some(LogGuard(guard)))
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn resolve_log_path(config_value: Option<&str>) -> Result<PathBuf> {
    let Some(raw) = config_value else {
        return Ok(crate::config::config_path()?.with_file_name(LOG_FILE_NAME));
    };

    let path = PathBuf::from(expand_tilde(raw));
    if raw.ends_with(std::path::MAIN_SEPARATOR) || path.is_dir() {
        return Ok(path.join(LOG_FILE_NAME));
    }
    Ok(path)
}

fn expand_tilde(raw: &str) -> String {
    if raw == "~" || raw.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}{}", home.display(), &raw[1..]);
        }
    }
    raw.to_string()
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    Ok(())
}

fn split_dir_and_name(path: &Path) -> Result<(PathBuf, String)> {
    let dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .context("Invalid debug_log_path: not valid UTF-8")?
        .to_string();
    Ok((dir, name))
}

/// Delete all but the newest `keep` daily files (`{base_name}.{YYYY-MM-DD}`).
/// `keep == 0` keeps everything.
fn prune_daily_logs(dir: &Path, base_name: &str, keep: usize) -> Result<()> {
    if keep == 0 {
        return Ok(());
    }

    let prefix = format!("{base_name}.");
    let mut candidates: Vec<String> = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read log directory: {}", dir.display()))?
    {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if name.starts_with(&prefix) {
            candidates.push(name.to_string());
        }
    }

    // Date suffixes sort lexicographically
    candidates.sort_unstable_by(|a, b| b.cmp(a));

    for name in candidates.iter().skip(keep) {
        let path = dir.join(name);
        if let Err(e) = std::fs::remove_file(&path) {
            tracing::debug!(error = %e, file = %path.display(), "failed to remove old log file");
        }
    }

    Ok(())
}

/// Mask Google API keys (`AIza` followed by key characters) in `input`
pub fn redact_secrets(input: &str) -> String {
    const PREFIX: &str = "AIza";
    const MIN_TAIL: usize = 30;

    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut last = 0usize;
    let mut i = 0usize;

    while let Some(offset) = input[i..].find(PREFIX) {
        let start = i + offset;
        let mut j = start + PREFIX.len();
        while j < bytes.len() && is_key_byte(bytes[j]) {
            j += 1;
        }

        if j - (start + PREFIX.len()) >= MIN_TAIL {
            out.push_str(&input[last..start]);
            out.push_str("AIza***REDACTED***");
            last = j;
        }
        i = j;
    }

    out.push_str(&input[last..]);
    out
}

fn is_key_byte(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_google_api_keys() {
        let body = "API key AIzaSyA1234567890abcdefghijklmnopqrstu is invalid";
        assert_eq!(redact_secrets(body), "API key AIza***REDACTED*** is invalid");
    }

    #[test]
    fn leaves_short_matches_alone() {
        assert_eq!(redact_secrets("AIzaShort and more"), "AIzaShort and more");
        assert_eq!(redact_secrets("no secrets here"), "no secrets here");
    }

    #[test]
    fn prunes_all_but_newest_daily_logs() {
        let dir = tempfile::tempdir().unwrap();
        for day in ["2026-10-15", "2026-10-16", "2026-10-17", "2026-10-18"] {
            std::fs::write(dir.path().join(format!("{LOG_FILE_NAME}.{day}")), "x").unwrap();
        }
        std::fs::write(dir.path().join("unrelated.txt"), "x").unwrap();

        prune_daily_logs(dir.path(), LOG_FILE_NAME, 2).unwrap();

        let mut left: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        left.sort();
        assert_eq!(
            left,
            vec![
                format!("{LOG_FILE_NAME}.2026-10-17"),
                format!("{LOG_FILE_NAME}.2026-10-18"),
                "unrelated.txt".to_string(),
            ]
        );
    }

    #[test]
    fn directory_log_path_gets_default_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().to_str().unwrap();
        assert_eq!(
            resolve_log_path(Some(raw)).unwrap(),
            dir.path().join(LOG_FILE_NAME)
        );
    }
}
