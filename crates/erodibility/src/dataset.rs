use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{error::RescaleError, record::Record};

/// Ordered list of records, loaded and written as a single JSON array.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset(Vec<Record>);

impl Dataset {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RescaleError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RescaleError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Dataset::from_reader(BufReader::new(file)).map_err(|err| match err {
            RescaleError::Parse { source, .. } => RescaleError::Parse {
                path: path.to_path_buf(),
                source,
            },
            err => err,
        })?;

        debug!("Loaded {} records from {:?}", dataset.len(), path);

        Ok(dataset)
    }

    /// The error path is empty since a reader has no name; [`Dataset::from_file`] fills it in.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RescaleError> {
        serde_json::from_reader(reader).map_err(|source| RescaleError::Parse {
            path: Default::default(),
            source,
        })
    }

    pub fn to_json_bytes(&self, pretty: bool) -> Result<Vec<u8>, RescaleError> {
        let bytes = if pretty {
            serde_json::to_vec_pretty(self)
        } else {
            serde_json::to_vec(self)
        };

        bytes.map_err(RescaleError::Serialize)
    }

    /// Writes into a temporary file next to `path` and renames it over `path`
    /// once complete. On failure `path` is left as it was.
    pub fn write_file<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<(), RescaleError> {
        let path = path.as_ref();
        let bytes = self.to_json_bytes(pretty)?;

        let write_error = |source: std::io::Error| RescaleError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
        file.write_all(&bytes).map_err(write_error)?;
        file.as_file().sync_all().map_err(write_error)?;
        file.persist(path).map_err(|err| write_error(err.error))?;

        debug!("Wrote {} bytes to {:?}", bytes.len(), path);

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Record> {
        self.0.iter_mut()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Dataset(iter.into_iter().collect())
    }
}
