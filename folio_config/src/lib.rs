use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads and merges the given config files in order.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_overrides(paths, &[])
}

/// Loads the given config files in order, then layers inline TOML fragments
/// on top of them.
pub fn load_with_overrides(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let mut builder = config::Config::builder();
    for path in paths {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        builder = builder.add_source(File::from_str(&content, FileFormat::Toml));
    }
    for fragment in overrides {
        builder = builder.add_source(File::from_str(fragment, FileFormat::Toml));
    }
    builder
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub relay: RelayConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct RelayConfig {
    /// The form relay endpoint submissions are POSTed to.
    pub endpoint: Url,
    /// How long to wait for the relay before giving up on an attempt.
    pub submit_timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    /// How long a successful submission stays visible before the form
    /// returns to idle and asks the surface to close.
    pub success_dismiss_delay: Duration,
}
