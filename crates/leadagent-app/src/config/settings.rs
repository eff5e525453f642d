//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use leadagent_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "lead-agent";

/// `<config_dir>/lead-agent/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`, falling back to defaults when the file
/// is missing or malformed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match load_settings_strict(config_path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("{}; using defaults", e);
            Settings::default()
        }
    }
}

/// Load settings from a path the user named explicitly. A missing or
/// invalid file is an error.
pub fn load_settings_strict(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::ConfigNotFound {
            path: config_path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {:?}", config_path))?;

    let settings: Settings = toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("{:?}: {}", config_path, e)))?;

    validate(&settings)?;
    debug!("Loaded settings from {:?}", config_path);
    Ok(settings)
}

/// Reject settings that cannot drive the HTTP services
pub fn validate(settings: &Settings) -> Result<()> {
    let url = url::Url::parse(&settings.service.base_url).map_err(|e| {
        Error::config_invalid(format!(
            "service.base_url '{}' is not a valid URL: {}",
            settings.service.base_url, e
        ))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::config_invalid(format!(
            "service.base_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if settings.service.timeout_secs == 0 {
        return Err(Error::config_invalid("service.timeout_secs must be > 0"));
    }

    Ok(())
}

/// Write the default config file if none exists. Returns true when a file
/// was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        info!("Config already exists at {:?}", config_path);
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}

const DEFAULT_CONFIG: &str = r#"# Lead Agent Configuration

[service]
base_url = "http://localhost:8000"
timeout_secs = 60

[analysis]
backend = "http"        # stub | http

[leads]
backend = "stub"        # stub | http
limit = 50

[send]
backend = "stub"        # stub | http
stub_delay_ms = 3000    # simulated latency of the stub sender
"#;
