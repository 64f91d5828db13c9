//! Durable key-value storage backing the session. The browser dashboard kept
//! these keys in local storage; here a store is anything that can get, set
//! and remove string values by key.

use crate::app_lib::AppError;
use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};
use tracing::{debug, warn};

pub trait SessionStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the backing medium cannot be written.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// In-process store; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.values
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.values().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.values().remove(key);
        Ok(())
    }
}

/// JSON object on disk. The file is re-read on every access so separate CLI
/// invocations observe each other's sign-in and sign-out.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, AppError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(BTreeMap::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|err| {
                AppError::Storage(format!(
                    "Session file {} is corrupt: {err}",
                    self.path.display()
                ))
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(AppError::Storage(format!(
                "Failed to read {}: {err}",
                self.path.display()
            ))),
        }
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<(), AppError> {
        if values.is_empty() {
            return match fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
                Err(err) => Err(AppError::Storage(format!(
                    "Failed to remove {}: {err}",
                    self.path.display()
                ))),
            };
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| {
                AppError::Storage(format!("Failed to create {}: {err}", parent.display()))
            })?;
        }

        let payload = serde_json::to_vec_pretty(values)
            .map_err(|err| AppError::Serialization(format!("Failed to encode session: {err}")))?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let storage_error =
            |err: std::io::Error| AppError::Storage(format!("Failed to write {}: {err}", self.path.display()));

        fs::write(&tmp, payload).map_err(storage_error)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(err) = fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600)) {
                warn!(path = %tmp.display(), "failed to restrict session file permissions: {err}");
            }
        }

        fs::rename(&tmp, &self.path).map_err(storage_error)?;

        debug!(path = %self.path.display(), keys = values.len(), "session file written");

        Ok(())
    }

    fn update(
        &self,
        change: impl FnOnce(&mut BTreeMap<String, String>),
    ) -> Result<(), AppError> {
        let _guard = self
            .lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut values = self.read()?;
        change(&mut values);
        self.write(&values)
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.update(|values| {
            values.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.update(|values| {
            values.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FileStore, MemoryStore, SessionStore};

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("auth_access_token").unwrap(), None);

        store.set("auth_access_token", "abc").unwrap();
        assert_eq!(
            store.get("auth_access_token").unwrap().as_deref(),
            Some("abc")
        );

        store.remove("auth_access_token").unwrap();
        store.remove("auth_access_token").unwrap();
        assert_eq!(store.get("auth_access_token").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = FileStore::new(&path);
        store.set("auth_access_token", "abc").unwrap();
        store.set("auth_token_type", "Bearer").unwrap();
        assert!(path.exists());

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get("auth_access_token").unwrap().as_deref(),
            Some("abc")
        );
        assert_eq!(
            reopened.get("auth_token_type").unwrap().as_deref(),
            Some("Bearer")
        );
    }

    #[cfg(unix)]
    #[test]
    fn file_store_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        FileStore::new(&path).set("auth_access_token", "abc").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn file_store_deletes_file_when_last_key_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileStore::new(&path);

        store.set("auth_user", "{}").unwrap();
        store.remove("auth_user").unwrap();

        assert!(!path.exists());
        assert_eq!(store.get("auth_user").unwrap(), None);
    }

    #[test]
    fn file_store_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        let err = store.get("auth_access_token").unwrap_err();
        assert!(err.to_string().contains("corrupt"));
    }

    #[test]
    fn file_store_treats_empty_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "\n").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get("auth_access_token").unwrap(), None);
    }
}
