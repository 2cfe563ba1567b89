use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::Task;

/// Error type for reading the task file
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not parse {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load the full task list from `path`.
///
/// A missing file is normal first-run state and yields an empty list. A file
/// that exists but isn't valid JSON is reported as `Corrupt`; the caller
/// decides whether to bail or continue with an empty store.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, LoadError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| LoadError::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the full task list to `path`, replacing previous contents.
///
/// The write goes through a temp file + rename so an interrupted save can't
/// leave a half-written store behind. Parent directories are created on
/// demand (first save on a fresh machine).
pub fn save_tasks(path: &Path, tasks: &[Task]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let data = serde_json::to_vec_pretty(tasks).map_err(io::Error::other)?;
    atomic_write(path, &data)
}

fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
