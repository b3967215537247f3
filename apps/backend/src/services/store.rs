//! JSON file storage for the set library.
//!
//! File layout:
//! ```json
//! {
//!   "current_set": "Python Basics",
//!   "sets": [
//!     { "name": "Python Basics", "cards": [
//!       { "term": "dictionary", "definition": "...", "mastery": 20, "starred": false }
//!     ] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use flashlearn_core::SetLibrary;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The set library together with the file it is saved to.
#[derive(Debug)]
pub struct SetStore {
    path: PathBuf,
    library: SetLibrary,
}

impl SetStore {
    /// Load the library from `path`, or start from the starter library if
    /// the file does not exist yet. Nothing is written until the first save.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            tracing::info!("No sets file at {}, starting with defaults", path.display());
            return Ok(Self {
                path,
                library: SetLibrary::default(),
            });
        }

        let content = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let mut library: SetLibrary =
            serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?;

        if library.repair() {
            tracing::warn!(
                "Sets file {} had no valid current set, selected {:?}",
                path.display(),
                library.current_name()
            );
        }

        tracing::info!("Loaded {} sets from {}", library.len(), path.display());
        Ok(Self { path, library })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn library(&self) -> &SetLibrary {
        &self.library
    }

    /// Apply a change to a copy of the library and keep it only once the
    /// copy has been saved. On any error the library is left as it was.
    pub fn modify<T, E>(
        &mut self,
        change: impl FnOnce(&mut SetLibrary) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let mut next = self.library.clone();
        let value = change(&mut next)?;
        write_library(&self.path, &next)?;
        self.library = next;
        Ok(value)
    }
}

fn write_library(path: &Path, library: &SetLibrary) -> Result<(), StoreError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(library).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Saved sets to {}", path.display());
    Ok(())
}
