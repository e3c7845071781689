//! Core logging bootstrap and safety policy.
//!
//! # Responsibility
//! - Start rolling file logs at most once per process.
//! - Keep store events metadata-only: indices and lengths, never record text.
//!
//! # Invariants
//! - Repeating `init_logging` with identical settings is a no-op.
//! - A second call with a different level or directory is rejected.
//! - Initialization reports failures as strings and never panics.

use crate::config::CoreConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "liststore";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 5;
const PANIC_SUMMARY_MAX_CHARS: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: &'static str,
    dir: PathBuf,
    _handle: LoggerHandle,
}

impl ActiveLogger {
    fn start(level: &'static str, dir: PathBuf) -> Result<Self, String> {
        std::fs::create_dir_all(&dir)
            .map_err(|err| format!("cannot create log dir `{}`: {err}", dir.display()))?;

        let handle = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?
            .log_to_file(
                FileSpec::default()
                    .directory(dir.as_path())
                    .basename(LOG_BASENAME),
            )
            .rotate(
                Criterion::Size(ROTATE_AT_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            // [YYYY-MM-DD HH:MM:SS.ffffff TZ] LEVEL [module] file:line: message
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| format!("logger backend failed to start: {err}"))?;

        install_panic_hook();

        info!(
            "event=logging_start module=core status=ok os={} profile={} version={} level={} dir={}",
            std::env::consts::OS,
            build_profile(),
            env!("CARGO_PKG_VERSION"),
            level,
            dir.display()
        );

        Ok(Self {
            level,
            dir,
            _handle: handle,
        })
    }

    fn ensure_matches(&self, level: &str, dir: &Path) -> Result<(), String> {
        if self.dir != dir {
            return Err(format!(
                "logging already writes to `{}`; refusing to switch to `{}`",
                self.dir.display(),
                dir.display()
            ));
        }
        if self.level != level {
            return Err(format!(
                "logging already runs at `{}`; refusing to switch to `{level}`",
                self.level
            ));
        }
        Ok(())
    }
}

/// Starts file logging at `level` under `log_dir`.
///
/// # Errors
/// - `level` is not one of `trace|debug|info|warn|error` (`warning` is
///   accepted as `warn`).
/// - `log_dir` is blank, relative, or cannot be created.
/// - Logging is already active with a different level or directory.
/// - The flexi_logger backend refuses to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = normalize_level(level)?;
    let dir = normalize_log_dir(log_dir)?;

    let active = ACTIVE_LOGGER.get_or_try_init(|| ActiveLogger::start(level, dir.clone()))?;
    active.ensure_matches(level, &dir)
}

/// Starts file logging from resolved configuration.
///
/// Returns `Ok(false)` when no log directory is configured and `Ok(true)`
/// once file logging is active.
///
/// # Errors
/// - Same as [`init_logging`].
pub fn init_logging_from_config(config: &CoreConfig) -> Result<bool, String> {
    let Some(dir) = config.log_dir() else {
        return Ok(false);
    };
    let dir = dir
        .to_str()
        .ok_or_else(|| format!("log dir `{}` is not valid UTF-8", dir.display()))?;
    init_logging(&config.log_level, dir)?;
    Ok(true)
}

/// Returns `(level, log_dir)` of the active logger, if any.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.level, active.dir.clone()))
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

pub(crate) fn normalize_level(level: &str) -> Result<&'static str, String> {
    let lowered = level.trim().to_ascii_lowercase();
    match lowered.as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        _ => Err(format!(
            "unsupported log level `{lowered}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log dir cannot be blank".to_string());
    }
    let path = PathBuf::from(trimmed);
    if path.is_relative() {
        return Err(format!("log dir must be absolute, got `{trimmed}`"));
    }
    Ok(path)
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Payload may carry record text; strip newlines and cap length.
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        error!(
            "event=panic module=core status=error location={} payload={}",
            location,
            panic_summary(info)
        );
        previous(info);
    }));
}

fn panic_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    let text = payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());
    truncate_single_line(&text, PANIC_SUMMARY_MAX_CHARS)
}

fn truncate_single_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let mut truncated: String = flattened.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, init_logging_from_config, logging_status, normalize_level,
        normalize_log_dir, truncate_single_line,
    };
    use crate::config::CoreConfig;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_log_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "liststore-logging-{tag}-{}-{nanos}",
            std::process::id()
        ))
    }

    #[test]
    fn normalize_level_is_case_insensitive_and_maps_warning() {
        assert_eq!(normalize_level("DEBUG").expect("DEBUG should normalize"), "debug");
        assert_eq!(
            normalize_level(" warning ").expect("warning should normalize"),
            "warn"
        );
        assert!(normalize_level("verbose").is_err());
    }

    #[test]
    fn normalize_log_dir_rejects_blank_and_relative_paths() {
        assert!(normalize_log_dir("   ").is_err());
        let error = normalize_log_dir("logs/dev").expect_err("relative path must be rejected");
        assert!(error.contains("absolute"));
    }

    #[test]
    fn truncate_single_line_flattens_and_caps() {
        assert_eq!(truncate_single_line("short", 10), "short");
        let truncated = truncate_single_line("one\ntwo\rthree", 7);
        assert_eq!(truncated, "one two...");
    }

    #[test]
    fn config_without_dir_leaves_logging_untouched() {
        let config = CoreConfig {
            log_level: "info".to_string(),
            log_dir: None,
        };
        assert_eq!(init_logging_from_config(&config), Ok(false));
    }

    #[test]
    fn init_logging_is_idempotent_and_rejects_reconfiguration() {
        let first = scratch_log_dir("active");
        let second = scratch_log_dir("other");
        let first_dir = first.to_str().expect("utf-8 temp dir").to_string();
        let second_dir = second.to_str().expect("utf-8 temp dir").to_string();

        init_logging("info", &first_dir).expect("first init should succeed");
        init_logging("INFO", &first_dir).expect("same settings should be accepted");

        let level_error = init_logging("debug", &first_dir).expect_err("level switch must fail");
        assert!(level_error.contains("refusing to switch"));
        let dir_error = init_logging("info", &second_dir).expect_err("dir switch must fail");
        assert!(dir_error.contains("refusing to switch"));

        let (level, dir) = logging_status().expect("logging should be active");
        assert_eq!(level, "info");
        assert_eq!(dir, first);
    }
}
