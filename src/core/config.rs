//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.okaynav/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::debounce::DEFAULT_RESIZE_DELAY;
use crate::core::engine::NavOptions;
use crate::core::item::ItemSpec;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OkayNavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub threshold: Option<f64>,
    pub align_right: Option<bool>,
    pub prioritize: Option<bool>,
    pub resize_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HeaderConfig {
    pub logo: Option<String>,
    pub toggle_icon: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Terminal cells kept free before collapsing. The engine's own default is
/// sized for pixels; cells are much coarser.
pub const DEFAULT_THRESHOLD: f64 = 2.0;
pub const DEFAULT_LOGO: &str = "okayNav";
pub const DEFAULT_TOGGLE_ICON: &str = "⋮";

fn default_items() -> Vec<ItemSpec> {
    [
        ("Home", 5),
        ("About", 2),
        ("Projects", 4),
        ("Blog", 3),
        ("Careers", 1),
        ("Contact", 4),
    ]
    .into_iter()
    .map(|(label, priority)| ItemSpec::new(label).with_priority(priority))
    .collect()
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub options: NavOptions,
    pub resize_delay: Duration,
    pub logo: String,
    pub toggle_icon: String,
    pub items: Vec<ItemSpec>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.okaynav/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".okaynav").join("config.toml"))
}

/// Load config from `~/.okaynav/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `OkayNavConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<OkayNavConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(OkayNavConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(OkayNavConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<OkayNavConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: OkayNavConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# okayNav Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# threshold = 2              # Free cells kept before collapsing (or OKAYNAV_THRESHOLD)
# align_right = true         # Nav and toggle on the right edge
# prioritize = true          # false: overflow right to left, ignoring priorities
# resize_delay_ms = 10       # Quiet period before recalculating after a resize

# [header]
# logo = "okayNav"
# toggle_icon = "⋮"

# Items in display order. Lower priority is hidden first (default 1).
# [[items]]
# label = "Home"
# priority = 5

# [[items]]
# label = "About"
# priority = 2
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_threshold` comes from the CLI flag (None = not specified).
pub fn resolve(config: &OkayNavConfig, cli_threshold: Option<f64>) -> ResolvedConfig {
    // Threshold: CLI → env → config → default
    let threshold = cli_threshold
        .or_else(|| {
            std::env::var("OKAYNAV_THRESHOLD")
                .ok()
                .and_then(|raw| raw.trim().parse().ok())
        })
        .or(config.general.threshold)
        .unwrap_or(DEFAULT_THRESHOLD);
    let threshold = if threshold.is_finite() && threshold >= 0.0 {
        threshold
    } else {
        warn!("Invalid threshold {}, using {}", threshold, DEFAULT_THRESHOLD);
        DEFAULT_THRESHOLD
    };

    let items = if config.items.is_empty() {
        default_items()
    } else {
        config.items.clone()
    };

    ResolvedConfig {
        options: NavOptions {
            threshold,
            align_right: config.general.align_right.unwrap_or(true),
            prioritize: config.general.prioritize.unwrap_or(true),
        },
        resize_delay: config
            .general
            .resize_delay_ms
            .map_or(DEFAULT_RESIZE_DELAY, Duration::from_millis),
        logo: config
            .header
            .logo
            .clone()
            .unwrap_or_else(|| DEFAULT_LOGO.to_string()),
        toggle_icon: config
            .header
            .toggle_icon
            .clone()
            .filter(|icon| !icon.is_empty())
            .unwrap_or_else(|| DEFAULT_TOGGLE_ICON.to_string()),
        items,
    }
}
