//! Tracing subscriber setup for the server binary.
//!
//! Read from the environment:
//!   LOG_FORMAT - "json" or "text" (default: "text")
//!   LOG_FILE   - write to this file, rotated daily, instead of stdout
//!   LOG_ANSI   - "true"/"1" or "false"/"0"; files default to no colors
//!   RUST_LOG   - env filter (default: [`DEFAULT_FILTER`])

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "notepad_api=debug,tower_http=debug";

const DEFAULT_FILE_NAME: &str = "notepad-api.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub format: LogFormat,
    pub file: Option<PathBuf>,
    pub ansi: Option<bool>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        let ansi = lookup("LOG_ANSI").and_then(|v| match v.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        });
        Self {
            format,
            file: lookup("LOG_FILE")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            ansi,
        }
    }

    /// Directory and file name for the rolling appender.
    fn file_target(&self) -> Option<(&Path, &str)> {
        let path = self.file.as_deref()?;
        let dir = path
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let name = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(DEFAULT_FILE_NAME);
        Some((dir, name))
    }

    fn describe_output(&self) -> String {
        match &self.file {
            Some(path) => path.display().to_string(),
            None => "(stdout)".to_string(),
        }
    }
}

/// Install the global subscriber. Keep the returned guard alive for as long
/// as file output should be flushed.
pub fn init_tracing(settings: &LogSettings) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let (writer, guard, ansi) = match settings.file_target() {
        Some((dir, name)) => {
            let (non_blocking, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, name));
            (
                BoxMakeWriter::new(non_blocking),
                Some(guard),
                settings.ansi.unwrap_or(false),
            )
        }
        None => (
            BoxMakeWriter::new(std::io::stdout),
            None,
            settings.ansi.unwrap_or(true),
        ),
    };

    let registry = tracing_subscriber::registry().with(filter);
    match settings.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .try_init()?,
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(ansi),
            )
            .try_init()?,
    }

    tracing::info!(
        log_format = ?settings.format,
        output = %settings.describe_output(),
        "Logging initialized"
    );
    Ok(guard)
}
