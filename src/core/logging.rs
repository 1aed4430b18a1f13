//! Logging and diagnostics.
//!
//! All log output goes to a daily-rolling JSON file under the platform data
//! directory. Nothing may touch stdout or stderr while ratatui owns the
//! terminal, so there is no console layer at all; the `log` macros used
//! throughout the crate are bridged into `tracing`, and miette renders fatal
//! errors only after the terminal has been restored. Rolled files from
//! previous days are gzipped by a background thread.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use console::Term;
use flate2::write::GzEncoder;
use flate2::Compression;
use miette::Diagnostic;
use supports_color::Stream;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "roledoc.log";
const DEFAULT_FILTER: &str = "roledoc=debug,info";

static TERM_PROFILE: OnceLock<TermProfile> = OnceLock::new();

fn term_profile() -> &'static TermProfile {
    TERM_PROFILE.get_or_init(TermProfile::probe)
}

// ============================================================================
// Terminal profile
// ============================================================================

/// Color depths a terminal can advertise, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColorDepth {
    None,
    Basic,
    Extended,
    TrueColor,
}

/// What the hosting terminal can render. Probed once, on first use.
#[derive(Debug, Clone, Copy)]
pub struct TermProfile {
    pub depth: ColorDepth,
    /// Whether stdout is a real terminal rather than a pipe.
    pub attended: bool,
    pub unicode_ok: bool,
    /// Columns available for diagnostic layout.
    pub columns: u16,
}

impl TermProfile {
    fn probe() -> Self {
        use is_terminal::IsTerminal;

        let depth = supports_color::on(Stream::Stdout).map_or(ColorDepth::None, |s| {
            if s.has_16m {
                ColorDepth::TrueColor
            } else if s.has_256 {
                ColorDepth::Extended
            } else if s.has_basic {
                ColorDepth::Basic
            } else {
                ColorDepth::None
            }
        });

        // UTF-8 locale and a TERM that is not "dumb"; assume the best when
        // either variable is missing.
        let term_ok = std::env::var("TERM").map_or(true, |t| !t.contains("dumb"));
        let lang_ok = std::env::var("LANG").map_or(true, |l| {
            let l = l.to_ascii_lowercase();
            l.contains("utf-8") || l.contains("utf8")
        });

        Self {
            depth,
            attended: io::stdout().is_terminal(),
            unicode_ok: term_ok && lang_ok,
            columns: Term::stdout().size().1,
        }
    }

    /// Styled output needs both an attended stdout and some color depth.
    pub fn use_color(&self) -> bool {
        self.attended && self.depth > ColorDepth::None
    }
}

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the logging system for TUI mode.
///
/// Returns a guard that flushes buffered log lines when dropped; keep it
/// alive for the life of the process.
pub fn init_tui() -> WorkerGuard {
    let dir = log_dir();
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("Cannot create log directory {}: {e}", dir.display());
    }

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).init();

    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("log-to-tracing bridge failed: {e}");
    }

    install_report_handler();

    // Gzip yesterday's logs once the macros have somewhere to go.
    let archive_dir = dir.clone();
    std::thread::spawn(move || archive_stale_logs(&archive_dir));

    log::info!(
        "Logging to {} (daily rolling)",
        dir.join(LOG_FILE_PREFIX).display()
    );

    guard
}

/// Log directory under the platform data dir.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("roledoc").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

// ============================================================================
// Log archival
// ============================================================================

/// Gzip rolled log files from previous days. The file the appender is
/// currently writing and anything already compressed are left alone.
fn archive_stale_logs(dir: &Path) {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let dated = format!("{LOG_FILE_PREFIX}.");

    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        // The daily roller names files "<prefix>.YYYY-MM-DD".
        let Some(roll_date) = name.strip_prefix(&dated) else {
            continue;
        };
        if roll_date == today || name.ends_with(".gz") {
            continue;
        }
        match gzip_in_place(&path) {
            Ok(()) => log::info!("Archived old log {}", path.display()),
            Err(e) => log::warn!("Could not archive {}: {e}", path.display()),
        }
    }
}

/// Compress one file to `<path>.gz` and delete the original.
fn gzip_in_place(path: &Path) -> io::Result<()> {
    let gz_path = {
        let mut name = path.as_os_str().to_os_string();
        name.push(".gz");
        PathBuf::from(name)
    };
    if gz_path.exists() {
        return Ok(());
    }

    let mut input = io::BufReader::new(fs::File::open(path)?);
    let mut encoder = GzEncoder::new(fs::File::create(&gz_path)?, Compression::default());
    io::copy(&mut input, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Install miette as the report handler, tuned to the probed terminal.
fn install_report_handler() {
    let profile = *term_profile();

    // Ignored when a handler is already installed (tests).
    let _ = miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .color(profile.use_color())
                .unicode(profile.unicode_ok)
                .terminal_links(profile.depth == ColorDepth::TrueColor)
                .width(profile.columns.max(40) as usize)
                .build(),
        )
    }));
}

/// Fatal error surfaced to the user after the terminal is restored.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(roledoc::fatal))]
pub struct AppError {
    message: String,

    #[help]
    help_text: Option<String>,
}

impl AppError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help_text: None,
        }
    }

    /// Attach a recovery hint, shown under the error.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help_text = Some(help.into());
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_probe_does_not_panic() {
        let profile = TermProfile::probe();
        assert!(profile.columns > 0);
    }

    #[test]
    fn test_use_color_requires_attended_color_terminal() {
        let unattended = TermProfile {
            depth: ColorDepth::TrueColor,
            attended: false,
            unicode_ok: true,
            columns: 80,
        };
        assert!(!unattended.use_color());

        let attended = TermProfile {
            attended: true,
            ..unattended
        };
        assert!(attended.use_color());

        let mono = TermProfile {
            depth: ColorDepth::None,
            ..attended
        };
        assert!(!mono.use_color());
    }

    #[test]
    fn test_color_depths_are_ordered() {
        assert!(ColorDepth::None < ColorDepth::Basic);
        assert!(ColorDepth::Extended < ColorDepth::TrueColor);
    }

    #[test]
    fn test_app_error_carries_help() {
        let err = AppError::new("backend unreachable").with_help("Is the server running?");
        assert_eq!(err.to_string(), "backend unreachable");
        assert!(err.help_text.is_some());
    }

    #[test]
    fn test_gzip_in_place_replaces_original() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join(format!("{LOG_FILE_PREFIX}.2020-01-01"));
        let mut f = fs::File::create(&log_path).unwrap();
        writeln!(f, "{{\"level\":\"INFO\",\"message\":\"old entry\"}}").unwrap();
        drop(f);

        gzip_in_place(&log_path).unwrap();

        assert!(!log_path.exists());
        let gz = dir.path().join(format!("{LOG_FILE_PREFIX}.2020-01-01.gz"));
        assert!(gz.exists());
        assert!(fs::metadata(&gz).unwrap().len() > 0);
    }

    #[test]
    fn test_archive_skips_today_and_compressed() {
        let dir = tempfile::tempdir().unwrap();
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();

        let today_path = dir.path().join(format!("{LOG_FILE_PREFIX}.{today}"));
        fs::write(&today_path, "current").unwrap();
        let old_path = dir.path().join(format!("{LOG_FILE_PREFIX}.2020-06-15"));
        fs::write(&old_path, "stale").unwrap();
        let gz_path = dir.path().join(format!("{LOG_FILE_PREFIX}.2020-06-14.gz"));
        fs::write(&gz_path, "already compressed").unwrap();

        archive_stale_logs(dir.path());

        assert!(today_path.exists());
        assert!(!old_path.exists());
        assert!(dir
            .path()
            .join(format!("{LOG_FILE_PREFIX}.2020-06-15.gz"))
            .exists());
        assert!(gz_path.exists());
    }
}
