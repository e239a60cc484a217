use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use log::{debug, warn};
use thiserror::Error;

use crate::datastructures::{default_defaults_dir, DefaultValue};

/// Version key whose defaults are used when no file exists for the requested version.
pub const FALLBACK_VERSION: &str = "950";

/// Failure to load the defaults of a version.
#[derive(Debug, Error)]
pub enum DefaultsError {
    /// Neither the requested nor the fallback file exists.
    #[error("No defaults for version {version}, fallback file {path:?} does not exist")]
    NotFound {
        /// Requested version key
        version: String,
        /// Fallback file that was looked up last
        path: PathBuf,
    },

    /// The defaults file exists but could not be read.
    #[error("Failed to read defaults file {path:?}: {source}")]
    Io {
        /// File that failed to read
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// The defaults file is not a flat json object of scalars.
    #[error("Failed to parse defaults file {path:?}: {source}")]
    Parse {
        /// File with the malformed content
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
}

/// Parameter defaults of one solver version.
#[derive(Debug, Default, PartialEq)]
pub struct DefaultTable {
    values: HashMap<String, DefaultValue>,
}

impl DefaultTable {
    /// Default of a parameter, `None` if the version has none.
    pub fn get(&self, parameter: &str) -> Option<&DefaultValue> {
        self.values.get(parameter)
    }

    /// Number of parameters with a default.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameter has a default.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, DefaultValue)> for DefaultTable {
    fn from_iter<I: IntoIterator<Item = (String, DefaultValue)>>(
        iter: I,
    ) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Turn a version such as `9.5.0` into the key of its defaults file (`950`).
pub fn normalize_version(version: &str) -> String {
    version.replace('.', "")
}

/// Loads `<version>.json` default files from a directory and keeps every
/// loaded table for the lifetime of the store.
#[derive(Debug)]
pub struct DefaultStore {
    dir: PathBuf,
    cache: Mutex<HashMap<String, Arc<DefaultTable>>>,
}

impl DefaultStore {
    /// Store reading `<version>.json` files from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Store reading the default files shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(default_defaults_dir())
    }

    /// Directory the default files are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Defaults for a normalized version key, read from disk on first use.
    pub fn load_defaults(
        &self,
        version: &str,
    ) -> Result<Arc<DefaultTable>, DefaultsError> {
        let mut cache =
            self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(table) = cache.get(version) {
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(self.read_defaults(version)?);
        cache.insert(version.to_string(), Arc::clone(&table));
        Ok(table)
    }

    fn read_defaults(&self, version: &str) -> Result<DefaultTable, DefaultsError> {
        let mut path = self.dir.join(format!("{version}.json"));
        if !path.exists() {
            path = self.dir.join(format!("{FALLBACK_VERSION}.json"));
            warn!(
                "No defaults for version {version}, falling back to {:?}",
                path
            );
            if !path.exists() {
                return Err(DefaultsError::NotFound {
                    version: version.to_string(),
                    path,
                });
            }
        }
        debug!("Loading parameter defaults from {:?}", path);
        let content = fs::read_to_string(&path).map_err(|source| {
            DefaultsError::Io {
                path: path.clone(),
                source,
            }
        })?;
        let values: HashMap<String, Option<DefaultValue>> =
            serde_json::from_str(&content)
                .map_err(|source| DefaultsError::Parse { path, source })?;
        Ok(values
            .into_iter()
            .filter_map(|(parameter, value)| Some((parameter, value?)))
            .collect())
    }
}
