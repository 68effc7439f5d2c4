use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::BizdoctorConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".bizdoctor.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;
const KNOWN_FORMATS: &[&str] = &["terminal", "json", "markdown"];

pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse TOML and reject values the CLI cannot honour.
pub fn parse_and_validate_config(contents: &str) -> Result<BizdoctorConfig> {
    let config = toml::from_str::<BizdoctorConfig>(contents)
        .map_err(|e| Error::configuration(format!("failed to parse {CONFIG_FILE_NAME}: {e}")))?;

    if let Some(format) = config.default_format() {
        if !KNOWN_FORMATS.contains(&format.to_lowercase().as_str()) {
            return Err(Error::configuration(format!(
                "unknown output.default_format \"{format}\", expected one of {}",
                KNOWN_FORMATS.join(", ")
            )));
        }
    }

    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BizdoctorConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(path = %config_path.display(), "{e}. Using defaults.");
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // a missing file is the normal case while walking up
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            path = %config_path.display(),
            "failed to read config file: {error}"
        );
    }
}

/// `start` and its parents, nearest first, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and up to nine ancestors for `.bizdoctor.toml`.
pub fn load_config_from(start: PathBuf) -> BizdoctorConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            BizdoctorConfig::default()
        })
}

/// Load an explicit config file, or discover one from the working directory.
pub fn load_config(explicit: Option<&Path>) -> Result<BizdoctorConfig> {
    if let Some(path) = explicit {
        let contents = read_config_file(path)?;
        return parse_and_validate_config(&contents);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(load_config_from(dir)),
        Err(e) => {
            tracing::warn!("Failed to get current directory: {e}. Using default config.");
            Ok(BizdoctorConfig::default())
        }
    }
}
