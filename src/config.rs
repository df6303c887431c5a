//! Project configuration: a `sqlpretty.toml` file, or a `[tool.sqlpretty]`
//! table inside `pyproject.toml`, discovered in the parent directories of the
//! formatted paths.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Result, SqlPrettyError};
use crate::options::FormatOptions;

/// Load configuration for the given files. Returns defaults when no config
/// file is found.
pub fn load_config(files: &[PathBuf], config_path: Option<&Path>) -> Result<FormatOptions> {
    let config_file = match config_path {
        Some(path) => {
            if path.exists() {
                Some(path.to_path_buf())
            } else {
                return Err(SqlPrettyError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
        }
        None => find_config_file(files),
    };

    match config_file {
        Some(path) => load_config_from_path(&path),
        None => Ok(FormatOptions::default()),
    }
}

/// Config file names, in precedence order within one directory.
const CONFIG_NAMES: [&str; 2] = ["sqlpretty.toml", "pyproject.toml"];

/// Walk from each input's directory up to the filesystem root, nearest
/// directory first, and return the first config file found. A directory
/// already walked covers its whole lineage, so later inputs stop at the
/// first ancestor they share with an earlier one.
fn find_config_file(files: &[PathBuf]) -> Option<PathBuf> {
    let mut visited: HashSet<PathBuf> = HashSet::new();

    for file in files {
        let start = if file.is_dir() {
            file.clone()
        } else {
            match file.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            }
        };

        let mut dir = Some(start.as_path());
        while let Some(current) = dir {
            if !visited.insert(current.to_path_buf()) {
                break;
            }
            for name in CONFIG_NAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
            dir = current.parent();
        }
    }

    None
}

/// Parse one config file. Unknown keys fail (the options record rejects
/// them), as do out-of-range values.
fn load_config_from_path(path: &Path) -> Result<FormatOptions> {
    let content = std::fs::read_to_string(path)?;
    let parsed: toml::Value = content
        .parse()
        .map_err(|e| SqlPrettyError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;

    let is_pyproject = path
        .file_name()
        .map(|n| n == "pyproject.toml")
        .unwrap_or(false);

    let section = if is_pyproject {
        match parsed.get("tool").and_then(|t| t.get("sqlpretty")) {
            Some(section) => section.clone(),
            None => return Ok(FormatOptions::default()),
        }
    } else {
        parsed
    };

    let options: FormatOptions = section
        .try_into()
        .map_err(|e| SqlPrettyError::Config(format!("Invalid config {}: {}", path.display(), e)))?;
    options.validate()?;
    Ok(options)
}
