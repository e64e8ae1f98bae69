use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use da_core::ports::{DraftStoreError, DraftStorePort};
use tracing::debug;

/// File-backed draft store: one JSON document per key inside a drafts
/// directory.
///
/// Writes go through a temp file plus rename so a crashed write never
/// leaves a half-written draft behind; the reader either sees the previous
/// value or the complete new one.
pub struct FileDraftStore {
    dir: PathBuf,
}

impl FileDraftStore {
    /// Store drafts under `dir`. The directory is created lazily on the
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn ensure_dir(&self) -> Result<(), DraftStoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            DraftStoreError::Unavailable(format!(
                "create drafts dir {} failed: {e}",
                self.dir.display()
            ))
        })
    }
}

impl DraftStorePort for FileDraftStore {
    fn read(&self, key: &str) -> Result<Option<String>, DraftStoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DraftStoreError::Io(format!("read draft {key} failed: {e}"))),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DraftStoreError> {
        self.ensure_dir()?;

        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)
            .map_err(|e| DraftStoreError::Io(format!("write draft {key} failed: {e}")))?;
        fs::rename(&tmp_path, &path).map_err(|e| {
            DraftStoreError::Io(format!(
                "rename temp draft to target failed: {} -> {}: {e}",
                tmp_path.display(),
                path.display()
            ))
        })?;

        debug!(key, path = %path.display(), "draft file written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), DraftStoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {
                debug!(key, "draft file removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DraftStoreError::Io(format!(
                "remove draft {key} failed: {e}"
            ))),
        }
    }
}
