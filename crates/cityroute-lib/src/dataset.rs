use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for the graph document.
pub const GRAPH_FILENAME: &str = "cities_and_edges.json";

/// Environment variable overriding the graph document location.
pub const GRAPH_PATH_ENV: &str = "CITYROUTE_GRAPH";

/// Resolve the default graph location using platform-specific project directories.
pub fn default_graph_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "cityroute", "cityroute").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(GRAPH_FILENAME))
}

/// Locate the graph document.
///
/// Resolution order: the explicit path (a directory is joined with
/// [`GRAPH_FILENAME`]), then `CITYROUTE_GRAPH`, then [`default_graph_path`].
/// The resolved file must exist.
pub fn resolve_graph_path(explicit: Option<&Path>) -> Result<PathBuf> {
    resolve_with_env(explicit, env::var_os(GRAPH_PATH_ENV))
}

fn resolve_with_env(explicit: Option<&Path>, from_env: Option<OsString>) -> Result<PathBuf> {
    let candidate = match (explicit, from_env) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(value)) if !value.is_empty() => PathBuf::from(value),
        _ => default_graph_path()?,
    };

    let path = if candidate.is_dir() {
        candidate.join(GRAPH_FILENAME)
    } else {
        candidate
    };

    if !path.is_file() {
        return Err(Error::GraphFileNotFound { path });
    }

    debug!(path = %path.display(), "resolved graph document");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn explicit_file_wins_over_environment() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("mine.json");
        let other = dir.path().join("other.json");
        fs::write(&explicit, "{}").unwrap();
        fs::write(&other, "{}").unwrap();

        let resolved = resolve_with_env(Some(&explicit), Some(other.into_os_string())).unwrap();
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn directory_is_joined_with_default_filename() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(GRAPH_FILENAME), "{}").unwrap();

        let resolved = resolve_with_env(Some(dir.path()), None).unwrap();
        assert_eq!(resolved, dir.path().join(GRAPH_FILENAME));
    }

    #[test]
    fn environment_is_used_without_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let from_env = dir.path().join("env.json");
        fs::write(&from_env, "{}").unwrap();

        let resolved = resolve_with_env(None, Some(from_env.clone().into_os_string())).unwrap();
        assert_eq!(resolved, from_env);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");

        let err = resolve_with_env(Some(&missing), None).unwrap_err();
        assert!(matches!(err, Error::GraphFileNotFound { path } if path == missing));
    }
}
