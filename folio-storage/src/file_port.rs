use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use folio_error::{FolioError, Result};

use crate::port::StoragePort;

/// File-backed [`StoragePort`]: one file per slot under a root directory.
pub struct FilePort {
    label: String,
    root: PathBuf,
}

impl FilePort {
    /// Create a port with a diagnostic label and root directory. The
    /// directory is created if it does not exist yet.
    pub fn new(label: &str, root: &Path) -> Result<Self> {
        fs::create_dir_all(root).map_err(|err| {
            FolioError::Storage(label.to_owned(), err.to_string())
        })?;
        Ok(Self {
            label: label.to_owned(),
            root: PathBuf::from(root),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl StoragePort for FilePort {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).map_err(|err| {
            FolioError::Storage(self.label.clone(), err.to_string())
        })?;
        Ok(Some(raw))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.slot_path(key);
        let file = File::create(&path).map_err(|err| {
            FolioError::Storage(self.label.clone(), err.to_string())
        })?;
        let mut writer = BufWriter::new(file);
        writer.write_all(value.as_bytes())?;
        writer.flush()?;

        log::info!(
            "{}: slot `{}` written ({} bytes)",
            self.label,
            key,
            value.len()
        );
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path).map_err(|err| {
            FolioError::Storage(self.label.clone(), err.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use crate::file_port::FilePort;
    use crate::port::StoragePort;

    #[test_log::test]
    fn test_file_port_write_read() {
        let temp_dir =
            TempDir::new("tmp").expect("Failed to create temporary directory");
        let mut port = FilePort::new("TestPort", temp_dir.path())
            .expect("Failed to create port");

        port.set("skills", "[1,2,3]").unwrap();
        assert_eq!(port.get("skills").unwrap().as_deref(), Some("[1,2,3]"));

        port.set("skills", "[]").unwrap();
        assert_eq!(port.get("skills").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_port_absent_slot() {
        let temp_dir =
            TempDir::new("tmp").expect("Failed to create temporary directory");
        let port = FilePort::new("TestPort", temp_dir.path())
            .expect("Failed to create port");

        assert_eq!(port.get("themes").unwrap(), None);
    }

    #[test]
    fn test_file_port_remove_is_noop_when_absent() {
        let temp_dir =
            TempDir::new("tmp").expect("Failed to create temporary directory");
        let mut port = FilePort::new("TestPort", temp_dir.path())
            .expect("Failed to create port");

        assert!(port.remove("themes").is_ok());

        port.set("themes", "[]").unwrap();
        port.remove("themes").unwrap();
        assert_eq!(port.get("themes").unwrap(), None);
    }
}
