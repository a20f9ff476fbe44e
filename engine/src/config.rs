use serde::Deserialize;
use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use folio_store::{StoreConfig, StoreError};
use folio_types::{Breakpoint, ui::UiOptions};

pub const DEFAULT_TRANSITION_MS: u64 = 800;
pub const DEFAULT_WHEEL_THRESHOLD: f32 = 30.0;
pub const DEFAULT_TOUCH_THRESHOLD: f32 = 50.0;
pub const DEFAULT_CELL_HEIGHT_PX: u32 = 16;

const STORE_URL_ENV: &str = "FOLIO_STORE_URL";
const STORE_KEY_ENV: &str = "FOLIO_STORE_ANON_KEY";
const STORE_TABLE_ENV: &str = "FOLIO_STORE_TABLE";

/// Contents of `~/.folio/config.toml`. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub app: Option<AppConfig>,
    pub navigation: Option<NavigationConfig>,
    pub store: Option<StoreSection>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for dots, bars and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable slide animations; transitions settle on the next frame.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Gesture and transition tuning.
///
/// ```toml
/// [navigation]
/// transition_ms = 800
/// wheel_threshold = 30.0
/// touch_threshold = 50.0
/// breakpoint_px = 768
/// cell_width_px = 8
/// cell_height_px = 16
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct NavigationConfig {
    pub transition_ms: Option<u64>,
    pub wheel_threshold: Option<f32>,
    pub touch_threshold: Option<f32>,
    pub breakpoint_px: Option<u32>,
    pub cell_width_px: Option<u32>,
    pub cell_height_px: Option<u32>,
}

/// Hosted record store for contact requests.
///
/// ```toml
/// [store]
/// url = "https://project.supabase.co"
/// anon_key = "${FOLIO_STORE_ANON_KEY}"
/// table = "contact_requests"
/// ```
#[derive(Default, Deserialize)]
pub struct StoreSection {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub table: Option<String>,
}

// Manual Debug impl to prevent leaking the store key in logs.
impl fmt::Debug for StoreSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreSection")
            .field("url", &self.url)
            .field(
                "anon_key",
                &if self.anon_key.is_some() {
                    "[REDACTED]"
                } else {
                    "None"
                },
            )
            .field("table", &self.table)
            .finish()
    }
}

/// Resolved navigation tuning with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSettings {
    /// Slide animation length; the debounce lock is held for exactly this long.
    pub transition: Duration,
    pub wheel_threshold: f32,
    pub touch_threshold: f32,
    pub breakpoint: Breakpoint,
    pub cell_height_px: u32,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            transition: Duration::from_millis(DEFAULT_TRANSITION_MS),
            wheel_threshold: DEFAULT_WHEEL_THRESHOLD,
            touch_threshold: DEFAULT_TOUCH_THRESHOLD,
            breakpoint: Breakpoint::default(),
            cell_height_px: DEFAULT_CELL_HEIGHT_PX,
        }
    }
}

/// Replace `${VAR}` references with environment values. Unset variables become empty.
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

impl FolioConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from an explicit path. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn navigation_settings(&self) -> NavigationSettings {
        let defaults = NavigationSettings::default();
        let Some(nav) = self.navigation.as_ref() else {
            return defaults;
        };

        let positive = |value: Option<f32>, fallback: f32| {
            value
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(fallback)
        };

        NavigationSettings {
            transition: nav
                .transition_ms
                .map_or(defaults.transition, Duration::from_millis),
            wheel_threshold: positive(nav.wheel_threshold, defaults.wheel_threshold),
            touch_threshold: positive(nav.touch_threshold, defaults.touch_threshold),
            breakpoint: Breakpoint {
                width_px: nav.breakpoint_px.unwrap_or(defaults.breakpoint.width_px),
                cell_width_px: nav
                    .cell_width_px
                    .filter(|v| *v > 0)
                    .unwrap_or(defaults.breakpoint.cell_width_px),
            },
            cell_height_px: nav
                .cell_height_px
                .filter(|v| *v > 0)
                .unwrap_or(defaults.cell_height_px),
        }
    }

    /// Store settings from `[store]`, falling back to `FOLIO_STORE_*` variables.
    pub fn store_config(&self) -> Result<StoreConfig, StoreError> {
        self.store_config_with(|name| env::var(name).ok())
    }

    pub(crate) fn store_config_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<StoreConfig, StoreError> {
        let section = self.store.as_ref();
        let pick = |value: Option<&String>, env_name: &str| {
            value
                .map(|raw| expand_env_vars(raw))
                .filter(|resolved| !resolved.trim().is_empty())
                .or_else(|| lookup(env_name))
                .unwrap_or_default()
        };

        let url = pick(section.and_then(|s| s.url.as_ref()), STORE_URL_ENV);
        let key = pick(section.and_then(|s| s.anon_key.as_ref()), STORE_KEY_ENV);
        let table = pick(section.and_then(|s| s.table.as_ref()), STORE_TABLE_ENV);
        StoreConfig::new(&url, &key, &table)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}
