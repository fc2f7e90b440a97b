//! Web front end config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use mm2q_core::error::{Mm2Error, Result};

pub use schema::{AppConfig, DisplaySection, ServerSection};

/// Config path used when `MM2Q_CONFIG` is unset.
pub const DEFAULT_PATH: &str = "mm2q.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        Mm2Error::Internal(format!("read config failed ({}): {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AppConfig> {
    let cfg: AppConfig = serde_yaml::from_str(s)
        .map_err(|e| Mm2Error::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve config the way the binary does, with `DEFAULT_PATH` as fallback.
pub fn load(env_path: Option<&str>) -> Result<AppConfig> {
    load_with_default(env_path, Path::new(DEFAULT_PATH))
}

/// An explicit `env_path` must be readable. Without one, a missing
/// `default_path` falls back to built-in defaults.
pub fn load_with_default(env_path: Option<&str>, default_path: &Path) -> Result<AppConfig> {
    match env_path {
        Some(path) => load_from_file(path),
        None if default_path.exists() => load_from_file(default_path),
        None => {
            tracing::info!(path = %default_path.display(), "config file not found, using defaults");
            Ok(AppConfig::default())
        }
    }
}
