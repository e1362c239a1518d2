use super::DataStore;
use crate::book::AddressBook;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(PhonebookError::Io)?;
        }
        Ok(())
    }

    fn temp_path(&self, dir: &Path) -> PathBuf {
        let stem = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("address_book");
        dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no address book yet, starting empty");
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(&self.path).map_err(PhonebookError::Io)?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        let book = AddressBook::from_records(records);
        info!(path = %self.path.display(), count = book.len(), "loaded address book");
        Ok(book)
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.ensure_dir(&dir)?;

        let content = serde_json::to_string_pretty(&book.records())
            .map_err(PhonebookError::Serialization)?;

        // Atomic write: the old file stays in place until the rename
        let tmp_path = self.temp_path(&dir);
        fs::write(&tmp_path, content).map_err(PhonebookError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(PhonebookError::Io(e));
        }

        info!(path = %self.path.display(), count = book.len(), "saved address book");
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}
