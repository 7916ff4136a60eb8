use std::path::PathBuf;
use std::sync::Once;

use unitconv_registry::CategoryKey;

use crate::error::*;

pub const DEFAULT_CATEGORY_VAR: &str = "UNITCONV_DEFAULT_CATEGORY";
pub const EXPORT_DIR_VAR: &str = "UNITCONV_EXPORT_DIR";
pub const LOG_VAR: &str = "UNITCONV_LOG";

/// Runtime settings of the command-line front end.
///
/// | Variable                    | Default  |
/// |-----------------------------|----------|
/// | `UNITCONV_DEFAULT_CATEGORY` | `length` |
/// | `UNITCONV_EXPORT_DIR`       | `.`      |
/// | `UNITCONV_LOG`              | `warn`   |
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub default_category: CategoryKey,
    pub export_dir: PathBuf,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_category: CategoryKey::Length,
            export_dir: PathBuf::from("."),
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load `.env` (once) and read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source.  Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();

        if let Some(key) = get(DEFAULT_CATEGORY_VAR) {
            let key = key.trim();
            settings.default_category = CategoryKey::from_key(key)
                .ok_or_else(|| ConvertError::UnknownCategory(key.to_string()))?;
        }
        if let Some(dir) = get(EXPORT_DIR_VAR) {
            settings.export_dir = PathBuf::from(dir);
        }
        if let Some(filter) = get(LOG_VAR).or_else(|| get("RUST_LOG")) {
            settings.log_filter = filter;
        }
        Ok(settings)
    }
}

// ── .env loading (once) ─────────────────────────────────────────────

/// Look for `.env` in the working directory, then next to the crate
/// manifest, then next to the executable.
pub fn load_dotenv() {
    static DOTENV_INIT: Once = Once::new();
    DOTENV_INIT.call_once(|| {
        if dotenvy::dotenv().is_ok() { return; }
        if let Ok(dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let p = PathBuf::from(dir).join(".env");
            if p.exists() { let _ = dotenvy::from_path(&p); return; }
        }
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let p = dir.join(".env");
                if p.exists() { let _ = dotenvy::from_path(&p); }
            }
        }
    });
}
