/// Logging helpers
///
/// Subscriber setup plus a few formatting helpers for human-readable output.
use std::path::Path;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::{AppResult, FileError};

/// Rotated log files kept next to `log_file` (one per day)
pub const LOG_RETENTION_FILES: usize = 10;

/// Installs the global subscriber.
///
/// - stderr: compact, INFO (DEBUG with `verbose`), `RUST_LOG` wins if set
/// - `log_file`: rotated daily, DEBUG, no ANSI colours
///
/// The returned guard flushes the file writer on drop; keep it alive until exit.
pub fn init(verbose: bool, log_file: &str) -> AppResult<WorkerGuard> {
    let stderr_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cook_upload=debug,info")
        } else {
            EnvFilter::new("cook_upload=info,warn")
        }
    });

    let (file_writer, guard) = tracing_appender::non_blocking(file_appender(log_file)?);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_writer)
        .with_filter(EnvFilter::new("cook_upload=debug,info"));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(stderr_filter);

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    Ok(guard)
}

/// Daily-rotated appender for `log_file`.
///
/// `logs/cook.log` is written as `logs/cook.YYYY-MM-DD.log`; only the newest
/// [`LOG_RETENTION_FILES`] files are kept.
pub fn file_appender(log_file: &str) -> Result<RollingFileAppender, FileError> {
    let path = Path::new(log_file);
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let prefix = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("cook");

    let mut builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .max_log_files(LOG_RETENTION_FILES);
    if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
        builder = builder.filename_suffix(extension);
    }

    builder
        .build(directory)
        .map_err(|source| FileError::LogFileFailed {
            path: log_file.to_string(),
            source,
        })
}

/// Logs the startup banner
pub fn log_startup(model: &str, db_id: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 cook-upload - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("🤖 Model: {}", model);
    info!("🗂️ Database: {}", db_id);
    info!("{}", "=".repeat(60));
}

/// Logs the final result
pub fn log_outcome(title: &str, url: Option<&str>, log_file: &str) {
    info!("{}", "─".repeat(60));
    info!("✅ Uploaded \"{}\"", title);
    if let Some(url) = url {
        info!("🔗 {}", url);
    }
    info!("{}", "─".repeat(60));
    info!("Log saved next to: {} (rotated daily)", log_file);
}

/// Truncates long text for log output
pub fn truncate_text(text: &str, max_len: usize) -> String {
    let single_line = text.replace('\n', " ⏎ ");
    if single_line.chars().count() > max_len {
        single_line.chars().take(max_len).collect::<String>() + "..."
    } else {
        single_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_file_appender_writes_dated_file() {
        let dir = TempDir::new().unwrap();
        let log_file = dir.path().join("logs").join("cook.log");

        let mut appender = file_appender(log_file.to_str().unwrap()).unwrap();
        appender.write_all(b"hello\n").unwrap();
        appender.flush().unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path().join("logs"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(names[0].starts_with("cook."));
        assert!(names[0].ends_with(".log"));
        assert_ne!(names[0], "cook.log");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghijkl", 5), "abcde...");
        assert_eq!(truncate_text("a\nb", 10), "a ⏎ b");
        assert_eq!(truncate_text("ééééé", 3), "ééé...");
    }
}
