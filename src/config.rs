// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. A path given explicitly (the CLI's `--config`)
//! 2. `$EULER_CONFIG` environment variable
//! 3. `./euler.toml`
//! 4. Built-in defaults (everything is optional)
//!
//! A file named by 1 or 2 must exist; a missing `./euler.toml` just means
//! defaults.

use crate::error::{EulerError, EulerResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "EULER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "euler.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub fibonacci: FibonacciConfig,
    pub window: WindowConfig,
    pub triples: TriplesConfig,
    pub triangle: TriangleConfig,
}

/// Problem 2.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FibonacciConfig {
    /// Sum even terms strictly below this.
    pub limit: u64,
}

/// Problem 8.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub size: usize,
    /// Digit file to scan. Default: the bundled 1000-digit number.
    pub digits_file: Option<PathBuf>,
}

/// Problem 9.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriplesConfig {
    pub target_sum: u64,
}

/// Problem 12.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriangleConfig {
    pub divisor_threshold: u64,
}

// --- Defaults ---

impl Default for FibonacciConfig {
    fn default() -> Self {
        Self { limit: 4_000_000 }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            size: 13,
            digits_file: None,
        }
    }
}

impl Default for TriplesConfig {
    fn default() -> Self {
        Self { target_sum: 1_000 }
    }
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            divisor_threshold: 500,
        }
    }
}

impl SolverConfig {
    pub fn from_toml_str(content: &str) -> EulerResult<Self> {
        toml::from_str(content).map_err(|e| EulerError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> EulerResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| EulerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content)
            .map_err(|e| EulerError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load config following the lookup order above.
    pub fn load(explicit: Option<&Path>) -> EulerResult<Self> {
        match resolve_path(explicit, std::env::var_os(CONFIG_ENV).map(PathBuf::from)) {
            ConfigSource::Required(path) => Self::from_file(&path),
            ConfigSource::Optional(path) if path.exists() => Self::from_file(&path),
            ConfigSource::Optional(_) => Ok(Self::default()),
        }
    }
}

#[derive(Debug, PartialEq)]
enum ConfigSource {
    Required(PathBuf),
    Optional(PathBuf),
}

fn resolve_path(explicit: Option<&Path>, from_env: Option<PathBuf>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Required(path.to_path_buf());
    }
    if let Some(path) = from_env {
        return ConfigSource::Required(path);
    }
    ConfigSource::Optional(PathBuf::from(DEFAULT_CONFIG_FILE))
}
