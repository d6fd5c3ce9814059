//! Native adapter for the world map explorer: loads inputs from disk and
//! renders the explorer's effects as terminal text.

pub mod surface;

use explorer_common::{shapes_from_json, Explorer, ExplorerConfig, ExplorerError, Shape};
use std::path::Path;

/// Error type for input loading failures
#[derive(Debug)]
pub enum CliError {
    ConfigLoad(anyhow::Error),
    ShapesLoad(anyhow::Error),
    ContentLoad(anyhow::Error),
    EmptyMap(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::ConfigLoad(e) => {
                write!(
                    f,
                    "Failed to load explorer config: {e}\n\nPossible fixes:\n  - Check that --config points to a readable JSON file\n  - Only list the fields you want to change, the rest keep their defaults\n  - Drop --config to run with the built-in defaults"
                )
            }
            CliError::ShapesLoad(e) => {
                write!(
                    f,
                    "Failed to load shapes: {e}\n\nThe shape dump must be a JSON array of objects such as:\n  {{\"id\": \"CA\", \"name\": \"Canada\", \"bbox\": {{\"x\": 0, \"y\": 0, \"width\": 10, \"height\": 10}}}}\nCheck the path given to --shapes."
                )
            }
            CliError::ContentLoad(e) => {
                write!(
                    f,
                    "Failed to read content dataset: {e}\n\nCheck the path given to --content, or leave it out to select without playlists."
                )
            }
            CliError::EmptyMap(path) => {
                write!(
                    f,
                    "No countries found in '{}'\n\nEvery country shape needs an id or class, and a name, title or data-name.",
                    path
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigLoad(e) | CliError::ShapesLoad(e) | CliError::ContentLoad(e) => {
                Some(e.as_ref())
            }
            CliError::EmptyMap(_) => None,
        }
    }
}

/// Read the explorer config, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<ExplorerConfig, CliError> {
    let Some(path) = path else {
        return Ok(ExplorerConfig::default());
    };
    let raw = fs_err::read_to_string(path).map_err(|e| CliError::ConfigLoad(e.into()))?;
    let config = ExplorerConfig::from_json(&raw).map_err(|e| CliError::ConfigLoad(e.into()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn load_shapes(path: &Path) -> Result<Vec<Shape>, CliError> {
    let raw = fs_err::read_to_string(path).map_err(|e| CliError::ShapesLoad(e.into()))?;
    shapes_from_json(&raw).map_err(|e| CliError::ShapesLoad(e.into()))
}

/// Build a ready explorer from files on disk. A content file that cannot be
/// read is an error; one that cannot be parsed only costs the playlists, the
/// same way a failed fetch does in the browser.
pub fn explorer_from_files(
    config: &ExplorerConfig,
    shapes: &Path,
    content: Option<&Path>,
) -> Result<Explorer, CliError> {
    let mut explorer =
        Explorer::new(config.clone()).map_err(|e| CliError::ConfigLoad(e.into()))?;
    explorer.load_shapes(load_shapes(shapes)?);
    if explorer.catalog().map_or(true, |c| c.is_empty()) {
        return Err(CliError::EmptyMap(shapes.display().to_string()));
    }

    match content {
        Some(path) => {
            let raw = fs_err::read_to_string(path).map_err(|e| CliError::ContentLoad(e.into()))?;
            if let Err(ExplorerError::DatasetUnavailable(reason)) = explorer.load_content(&raw) {
                log::warn!("Continuing without content: {}", reason);
            }
        }
        None => explorer.set_content(Default::default()),
    }
    Ok(explorer)
}
