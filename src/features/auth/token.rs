//! Durable storage for the bearer token. The browser keeps it in
//! `localStorage`, the console binary in a file, tests in memory. The token is
//! read back on every authenticated request and erased on logout.

use crate::app_lib::AppError;
use secrecy::{ExposeSecret, SecretString};
use std::sync::{Arc, Mutex, PoisonError};

/// One durable key holding the bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<SecretString>;

    /// Persists the token, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`AppError::Storage`] when the backing storage rejects the write.
    fn save(&self, token: &SecretString) -> Result<(), AppError>;

    /// Erases the key. Failures are logged, not returned.
    fn clear(&self);
}

/// Process-local storage; clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn contains_token(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<SecretString> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .map(SecretString::from)
    }

    fn save(&self, token: &SecretString) -> Result<(), AppError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(token.expose_secret().to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserTokenStore;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileTokenStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::TokenStore;
    use crate::app_lib::AppError;
    use secrecy::{ExposeSecret, SecretString};

    /// `localStorage` entry named by the configured token key.
    #[derive(Clone, Debug)]
    pub struct BrowserTokenStore {
        key: String,
    }

    impl BrowserTokenStore {
        pub fn new(key: impl Into<String>) -> Self {
            Self { key: key.into() }
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten()
    }

    impl TokenStore for BrowserTokenStore {
        fn load(&self) -> Option<SecretString> {
            storage()?
                .get_item(&self.key)
                .ok()
                .flatten()
                .filter(|value| !value.is_empty())
                .map(SecretString::from)
        }

        fn save(&self, token: &SecretString) -> Result<(), AppError> {
            let storage = storage()
                .ok_or_else(|| AppError::Storage("Local storage is unavailable.".to_string()))?;
            storage
                .set_item(&self.key, token.expose_secret())
                .map_err(|_| AppError::Storage("Unable to persist the session.".to_string()))
        }

        fn clear(&self) {
            if let Some(storage) = storage()
                && storage.remove_item(&self.key).is_err()
            {
                tracing::warn!("failed to remove token from local storage");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::TokenStore;
    use crate::app_lib::AppError;
    use secrecy::{ExposeSecret, SecretString};
    use std::{
        fs,
        io::{self, ErrorKind, Write},
        path::{Path, PathBuf},
    };

    /// Token kept in a single file, created with owner-only permissions on unix.
    #[derive(Clone, Debug)]
    pub struct FileTokenStore {
        path: PathBuf,
    }

    impl FileTokenStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl TokenStore for FileTokenStore {
        fn load(&self) -> Option<SecretString> {
            let contents = fs::read_to_string(&self.path).ok()?;
            let token = contents.trim();
            if token.is_empty() {
                None
            } else {
                Some(SecretString::from(token))
            }
        }

        fn save(&self, token: &SecretString) -> Result<(), AppError> {
            if let Some(parent) = self.path.parent()
                && !parent.as_os_str().is_empty()
            {
                create_private_dir(parent).map_err(|err| {
                    AppError::Storage(format!("Unable to create {}: {err}", parent.display()))
                })?;
            }
            write_private(&self.path, token.expose_secret()).map_err(|err| {
                AppError::Storage(format!("Unable to write {}: {err}", self.path.display()))
            })
        }

        fn clear(&self) {
            match fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => {
                    tracing::warn!(path = %self.path.display(), "failed to remove token file: {err}");
                }
            }
        }
    }

    #[cfg(unix)]
    fn create_private_dir(dir: &Path) -> io::Result<()> {
        use std::os::unix::fs::DirBuilderExt;
        fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)
    }

    #[cfg(not(unix))]
    fn create_private_dir(dir: &Path) -> io::Result<()> {
        fs::create_dir_all(dir)
    }

    // Created as 0600; an existing file is narrowed before the token is written.
    #[cfg(unix)]
    fn write_private(path: &Path, contents: &str) -> io::Result<()> {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        let mut file = fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)?;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    }

    #[cfg(not(unix))]
    fn write_private(path: &Path, contents: &str) -> io::Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_the_slot() {
        let store = MemoryTokenStore::default();
        let other = store.clone();

        store.save(&SecretString::from("abc")).expect("save");
        assert!(other.contains_token());
        assert_eq!(
            other.load().map(|token| token.expose_secret().to_string()),
            Some("abc".to_string())
        );

        other.clear();
        assert!(!store.contains_token());
        assert!(store.load().is_none());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_round_trips_and_clears() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileTokenStore::new(dir.path().join("nested").join("token"));

        assert!(store.load().is_none());
        store.save(&SecretString::from("abc123\n")).expect("save");
        assert_eq!(
            store.load().map(|token| token.expose_secret().to_string()),
            Some("abc123".to_string())
        );

        store.clear();
        assert!(!store.path().exists());
        // Clearing twice is a no-op.
        store.clear();
    }

    #[cfg(unix)]
    #[test]
    fn file_store_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileTokenStore::new(dir.path().join("nested").join("token"));
        store.save(&SecretString::from("abc")).expect("save");

        let mode = |path: &std::path::Path| {
            std::fs::metadata(path)
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777
        };
        assert_eq!(mode(store.path()), 0o600);
        assert_eq!(mode(&dir.path().join("nested")), 0o700);
    }

    #[cfg(unix)]
    #[test]
    fn file_store_narrows_an_existing_readable_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("token");
        std::fs::write(&path, "stale-token-with-more-bytes").expect("seed");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).expect("chmod");

        let store = FileTokenStore::new(&path);
        store.save(&SecretString::from("fresh")).expect("save");

        let mode = std::fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "fresh");
    }
}
