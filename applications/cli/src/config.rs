//! Player configuration loading

use anyhow::{Context, Result};
use cadence_playback::PlaybackConfig;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "cadence.toml";

/// Environment prefix, e.g. `CADENCE_VOLUME=0.5`
pub const ENV_PREFIX: &str = "CADENCE";

/// Load configuration from file and environment
///
/// An explicit `path` must exist; the default file is optional. Environment
/// variables override file values. The result is validated.
pub fn load(path: Option<&Path>) -> Result<PlaybackConfig> {
    let mut settings = config::Config::builder();

    settings = match path {
        Some(path) => settings.add_source(config::File::from(path.to_path_buf())),
        None => settings
            .add_source(config::File::from(PathBuf::from(DEFAULT_CONFIG_FILE)).required(false)),
    };

    settings = settings.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

    let playback: PlaybackConfig = settings
        .build()
        .context("failed to read configuration")?
        .try_deserialize()
        .context("invalid configuration")?;

    playback.validate()?;
    Ok(playback)
}
