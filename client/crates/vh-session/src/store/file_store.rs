use crate::store::{LoadResult, SessionStore, StoreError, StoreResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use vh_core::User;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Session record kept as a JSON file.
///
/// Writes go through a temp file, fsync and rename so a crash mid-write never
/// leaves a half-written record behind.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
    file_name: String,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Moves a corrupted record aside for debugging.
    ///
    /// Renames `<file>` to `<file>.corrupted.{timestamp}`.
    pub fn backup_corrupted(&self) -> StoreResult<Option<PathBuf>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self
            .dir
            .join(format!("{}.corrupted.{timestamp}", self.file_name));

        fs::rename(&path, &backup_path).map_err(|e| StoreError::backup_failed(e))?;

        warn!("Backed up corrupted session to {backup_path:?}");
        Ok(Some(backup_path))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.tmp.{}", self.file_name, std::process::id()))
    }

    fn write_synced(path: &Path, contents: &[u8]) -> StoreResult<()> {
        let mut file =
            fs::File::create(path).map_err(|e| StoreError::file_write(path.to_path_buf(), e))?;

        file.write_all(contents)
            .map_err(|e| StoreError::file_write(path.to_path_buf(), e))?;

        file.sync_all()
            .map_err(|e| StoreError::file_write(path.to_path_buf(), e))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> StoreResult<LoadResult> {
        let path = self.path();

        if !path.exists() {
            debug!("No session file at {path:?}");
            return Ok(LoadResult::empty());
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StoreError::file_read(path.clone(), e))?;

        match serde_json::from_str::<User>(&contents) {
            Ok(user) => {
                debug!("Read session record for {} ({})", user.email, user.role);
                Ok(LoadResult::loaded(user))
            }
            Err(e) => {
                warn!("Session file corrupted at {path:?}: {e}");
                if let Err(backup_err) = self.backup_corrupted() {
                    warn!("Could not move corrupted session aside: {backup_err}");
                }
                Ok(LoadResult::corrupted(e.to_string()))
            }
        }
    }

    fn save(&self, user: &User) -> StoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::dir_creation(self.dir.clone(), e))?;

        let final_path = self.path();
        let temp_path = self.temp_path();

        let json = serde_json::to_string_pretty(user)?;

        Self::write_synced(&temp_path, json.as_bytes())?;

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path.clone(), final_path.clone(), e)
        })?;

        debug!("Saved session for {}", user.email);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        let path = self.path();

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed session file {path:?}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::file_remove(path, e)),
        }
    }
}
