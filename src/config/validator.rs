//! Configuration validation with aggregated errors.
//! All issues are collected into a Vec<String> so a bad file is fixed in one pass.

use tracing::{error, info};

use crate::config::settings::{ClientConfig, LoggingConfig, Settings};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_client_config(cfg: &ClientConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.credentials.app_id.trim().is_empty() {
        errors.push("credentials.app_id must not be empty".to_string());
    }
    if cfg.credentials.secret.trim().is_empty() {
        errors.push("credentials.secret must not be empty".to_string());
    }

    validate_settings(&cfg.settings, &mut errors);

    if errors.is_empty() {
        info!("config is valid");
        Ok(())
    } else {
        for e in &errors {
            error!("config error: {}", e);
        }
        Err(errors)
    }
}

pub fn validate_settings(settings: &Settings, errors: &mut Vec<String>) {
    if !(settings.auth_url.starts_with("https://") || settings.auth_url.starts_with("http://")) {
        errors.push(format!(
            "settings.auth_url '{}' must be an http(s) url",
            settings.auth_url
        ));
    }
    if settings.scope.trim().is_empty() {
        errors.push("settings.scope must not be empty".to_string());
    }
    if settings.timeout_ms == 0 {
        errors.push("settings.timeout_ms must be > 0".to_string());
    }
    if let Some(logging) = &settings.logging {
        validate_logging(logging, errors);
    }
}

fn validate_logging(logging: &LoggingConfig, errors: &mut Vec<String>) {
    if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        errors.push(format!(
            "settings.logging.level '{}' must be one of {:?}",
            logging.level, LOG_LEVELS
        ));
    }
}
