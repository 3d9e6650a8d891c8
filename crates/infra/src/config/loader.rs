//! Configuration loader
//!
//! Loads the cache settings from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Uses `ENTCACHE_CONFIG_PATH` when set, otherwise probes standard paths
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `ENTCACHE_DEFAULT_CACHE_NAME`: Region of the default policy (required)
//! - `ENTCACHE_DEFAULT_MODE`: `entity` or `serialized_string`
//! - `ENTCACHE_DEFAULT_EXPIRATION_SECS`: Absolute expiration of the default
//!   policy
//! - `ENTCACHE_REGION_MAX_CAPACITY`: Entry limit per in-memory region
//! - `ENTCACHE_LOG_SKIP_CACHE`: Log stores skipped by disabled policies
//!   (true/false)
//!
//! Per-type policies can only be configured from a file.
//!
//! ## File Locations
//! The loader probes `entcache.json` and `entcache.toml` in:
//! 1. The current working directory
//! 2. Its parent and grandparent directories
//! 3. The executable's directory and its parent

use std::path::{Path, PathBuf};
use std::time::Duration;

use entcache_domain::constants::{
    ENV_CONFIG_PATH, ENV_DEFAULT_CACHE_NAME, ENV_DEFAULT_EXPIRATION_SECS, ENV_DEFAULT_MODE,
    ENV_LOG_SKIP_CACHE, ENV_REGION_MAX_CAPACITY,
};
use entcache_domain::{
    CacheEntryOptions, CacheLoggingPolicy, CacheMode, CachePolicy, CacheSettings,
    EntityCacheError, RegionSettings, Result,
};

const CONFIG_FILE_NAMES: [&str; 2] = ["entcache.json", "entcache.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing or a value is invalid, falls back to a config file.
///
/// # Errors
/// Returns `EntityCacheError::Config` if neither source yields settings.
pub fn load() -> Result<CacheSettings> {
    match load_from_env() {
        Ok(settings) => {
            tracing::info!("Cache configuration loaded from environment variables");
            Ok(settings)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Builds settings with a default policy only.
///
/// # Errors
/// Returns `EntityCacheError::Config` if `ENTCACHE_DEFAULT_CACHE_NAME` is
/// missing or any value fails to parse.
pub fn load_from_env() -> Result<CacheSettings> {
    let cache_name = env_var(ENV_DEFAULT_CACHE_NAME)?;

    let mode = match std::env::var(ENV_DEFAULT_MODE) {
        Ok(raw) => raw.parse::<CacheMode>().map_err(EntityCacheError::Config)?,
        Err(_) => CacheMode::default(),
    };

    let mut entry_options = CacheEntryOptions::default();
    if let Ok(raw) = std::env::var(ENV_DEFAULT_EXPIRATION_SECS) {
        let secs = raw.trim().parse::<u64>().map_err(|e| {
            EntityCacheError::Config(format!("Invalid default expiration: {}", e))
        })?;
        entry_options = entry_options.with_absolute_expiration(Duration::from_secs(secs));
    }

    let mut regions = RegionSettings::default();
    if let Ok(raw) = std::env::var(ENV_REGION_MAX_CAPACITY) {
        regions.max_capacity = raw.trim().parse::<u64>().map_err(|e| {
            EntityCacheError::Config(format!("Invalid region max capacity: {}", e))
        })?;
    }

    Ok(CacheSettings {
        default_policy: Some(CachePolicy {
            allow_caching: true,
            mode,
            cache_name,
            entry_options,
        }),
        policies: Vec::new(),
        regions,
        logging: CacheLoggingPolicy { log_skip_cache: env_bool(ENV_LOG_SKIP_CACHE, false) },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, uses `ENTCACHE_CONFIG_PATH` when set and otherwise
/// probes the standard locations. Format is detected by file extension.
///
/// # Errors
/// Returns `EntityCacheError::Config` if:
/// - File not found (when a path is given or configured)
/// - No config file found (when probing)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<CacheSettings> {
    let config_path = match path.or_else(|| std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from)) {
        Some(p) => {
            if !p.exists() {
                return Err(EntityCacheError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            EntityCacheError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading cache configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| EntityCacheError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse settings from file contents, choosing the format by extension.
fn parse_config(contents: &str, path: &Path) -> Result<CacheSettings> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| EntityCacheError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| EntityCacheError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(EntityCacheError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for a config file
///
/// Returns the first existing candidate, or `None`.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.extend([exe_dir.to_path_buf(), exe_dir.join("..")]);
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        EntityCacheError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
