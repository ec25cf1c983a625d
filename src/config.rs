//! Starlane configuration and creator-identity resolution.
//!
//! Configuration lives at `~/.starlane/config.toml` and is optional; every
//! field has a working default. The identity recorded on a new cruise is
//! resolved through a chain so agents and humans don't need `--as` on every
//! invocation:
//!
//! 1. `--as <identity>` (explicit per-command override)
//! 2. the `STARLANE_IDENTITY` env var (process/session level)
//! 3. `identity = "..."` in the config file (global default)

use std::path::PathBuf;
use std::{env, fs};

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Database path override. Defaults to `~/.starlane/fleet.sqlite`.
    pub database: Option<PathBuf>,

    /// Default identity recorded as cruise creator.
    pub identity: Option<String>,
}

impl Config {
    /// Loads `~/.starlane/config.toml`. A missing file yields defaults; a
    /// present but malformed file is an error.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.starlane/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".starlane").join("config.toml"))
    }
}

/// Error message shown when identity cannot be resolved.
pub const IDENTITY_REQUIRED: &str = "identity required: pass --as <identity>, \
    set STARLANE_IDENTITY, or add `identity = \"...\"` to ~/.starlane/config.toml";

/// Resolves the identity to record as a cruise's creator.
pub fn resolve_identity(explicit: Option<&str>, config: &Config) -> Result<String, String> {
    // 1. Explicit --as flag.
    if let Some(id) = explicit {
        return Ok(id.to_string());
    }

    // 2. STARLANE_IDENTITY environment variable.
    if let Ok(id) = env::var("STARLANE_IDENTITY")
        && !id.is_empty()
    {
        return Ok(id);
    }

    // 3. Config file default.
    if let Some(id) = &config.identity
        && !id.is_empty()
    {
        return Ok(id.clone());
    }

    Err(IDENTITY_REQUIRED.to_string())
}
