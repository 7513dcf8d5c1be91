//! L2 persistent cache: one JSON object mapping content hash to vector.
//!
//! Loaded whole at open, written whole on `save` when dirty. Writes go to a
//! sibling temp file that is renamed over the target, so a crash mid-save
//! leaves the previous cache intact.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use intent_core::errors::{EmbeddingError, IntentError, IntentResult};
use tracing::debug;

pub struct L2FileCache {
    path: PathBuf,
    entries: BTreeMap<String, Vec<f32>>,
    dirty: bool,
}

fn io_error(path: &Path, source: std::io::Error) -> IntentError {
    IntentError::Io {
        path: path.display().to_string(),
        source,
    }
}

impl L2FileCache {
    /// Open the cache file. A missing file is an empty cache.
    pub fn open(path: &Path) -> IntentResult<Self> {
        let entries = match File::open(path) {
            Ok(file) => serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                EmbeddingError::CacheCorrupt {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(io_error(path, e)),
        };
        debug!(path = %path.display(), entries = entries.len(), "L2 cache loaded");
        Ok(Self {
            path: path.to_path_buf(),
            entries,
            dirty: false,
        })
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.entries.get(key).cloned()
    }

    pub fn insert(&mut self, key: String, embedding: Vec<f32>) {
        self.entries.insert(key, embedding);
        self.dirty = true;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn save(&mut self) -> IntentResult<()> {
        if !self.dirty {
            return Ok(());
        }
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| io_error(dir, e))?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer(&mut writer, &self.entries)?;
            writer.flush().map_err(|e| io_error(&self.path, e))?;
        }
        tmp.persist(&self.path)
            .map_err(|e| io_error(&self.path, e.error))?;
        self.dirty = false;
        debug!(path = %self.path.display(), entries = self.entries.len(), "L2 cache saved");
        Ok(())
    }
}
