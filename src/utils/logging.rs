use clap::ValueEnum;
use tracing::debug;
use tracing_subscriber::fmt::{self, time::UtcTime};
use tracing_subscriber::EnvFilter;

use crate::config::settings::{LogFormat, LoggingConfig, Settings, DEFAULT_LOG_LEVEL};

/// Level accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    pub fn filter(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Effective logging config. A level given on the command line replaces the file's.
pub fn resolve(settings: &Settings, cli_level: Option<LogLevel>) -> LoggingConfig {
    let mut resolved = settings.logging.clone().unwrap_or_default();
    if let Some(level) = cli_level {
        resolved.level = level.filter().to_owned();
    }
    resolved
}

pub fn run(settings: &Settings, cli_level: Option<LogLevel>) {
    if !init_logging(&resolve(settings, cli_level)) {
        debug!("global subscriber already set, keeping it");
    }
}

/// Install the global subscriber. Returns false when one is already installed.
pub fn init_logging(cfg: &LoggingConfig) -> bool {
    let filter =
        EnvFilter::try_new(&cfg.level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let builder = fmt::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339());

    let installed = match cfg.format {
        LogFormat::Json => builder
            .json()
            .flatten_event(true)
            .with_ansi(false)
            .try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_overrides_config() {
        let settings = Settings {
            logging: Some(LoggingConfig {
                level: "warn".into(),
                format: LogFormat::Json,
            }),
            ..Settings::default()
        };

        let resolved = resolve(&settings, Some(LogLevel::Debug));
        assert_eq!(resolved.level, "debug");
        assert_eq!(resolved.format, LogFormat::Json);

        assert_eq!(resolve(&settings, None).level, "warn");
        assert_eq!(resolve(&Settings::default(), None).level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn second_init_keeps_first_subscriber() {
        let cfg = LoggingConfig::default();
        init_logging(&cfg);
        assert!(!init_logging(&cfg));
    }
}
