use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::errors::{DirlibError, Result};
use crate::storage::base::KeyValueStorage;

/// A key-value backend that keeps one file per key under a root directory.
///
/// The root directory is created lazily on the first write, so pointing a
/// storage at a directory that does not exist yet behaves like an empty
/// backend.
pub struct FileStorage {
    label: String,
    root: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with a diagnostic label and root directory
    pub fn new(label: String, root: &Path) -> Self {
        Self {
            label,
            root: PathBuf::from(root),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DirlibError::Storage(self.label.clone(), e.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let file = File::create(self.key_path(key))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(value.as_bytes())?;
        writer.flush()?;

        log::info!("{}: {} bytes written under `{}`", self.label, value.len(), key);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DirlibError::Storage(self.label.clone(), e.to_string())),
        }
    }
}
