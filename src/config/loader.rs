//! Loading hyperspace configuration files

use std::fs;
use std::path::Path;

use tracing::debug;

use super::schema::HyperspaceConfig;
use super::validate::validate_config;
use crate::error::{HyperspaceError, Result};

/// Load and validate a hyperspace configuration.
///
/// Files ending in `.json` are parsed as JSON, anything else as YAML.
///
/// # Example
///
/// ```no_run
/// use hyperfold::config::load_config;
///
/// let config = load_config("hyperspace.yaml")?;
/// let hyperspace = config.build()?;
/// # Ok::<(), hyperfold::HyperspaceError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<HyperspaceConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| HyperspaceError::io(format!("reading config file {}", path.display()), e))?;

    let config = parse_config(&content, is_json(path)).map_err(|message| HyperspaceError::Config {
        path: path.to_path_buf(),
        message,
    })?;

    validate_config(&config).map_err(|e| HyperspaceError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(path = %path.display(), hyperparameters = config.hyperparameters.len(), "loaded config");
    Ok(config)
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn parse_config(content: &str, json: bool) -> std::result::Result<HyperspaceConfig, String> {
    if json {
        serde_json::from_str(content).map_err(|e| format!("Failed to parse JSON config: {e}"))
    } else {
        serde_yaml::from_str(content).map_err(|e| format!("Failed to parse YAML config: {e}"))
    }
}
