//! JSON file adapter for the user store.
//!
//! The collection lives in one file holding a top-level JSON array,
//! pretty-printed with two-space indentation. Writes truncate and overwrite
//! the file in place: there is no temp-file rename and no fsync, so a crash
//! mid-write can leave a truncated file behind.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use tracing::debug;

use crate::domain::User;
use crate::domain::ports::{UserStore, UserStoreError};

/// User store backed by a JSON file on local disk.
///
/// The parent directory is opened once as a capability handle; all reads and
/// writes go through it by file name. Blocking I/O runs on Tokio's blocking
/// pool.
#[derive(Debug, Clone)]
pub struct JsonFileUserStore {
    dir: Arc<Dir>,
    file_name: String,
    path: PathBuf,
}

impl JsonFileUserStore {
    /// Open a store for `path`, creating its parent directory when missing.
    ///
    /// The file itself is not created until the first write.
    ///
    /// # Errors
    /// Returns [`UserStoreError::Io`] when `path` has no file name or the
    /// parent directory cannot be created or opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, UserStoreError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                UserStoreError::io(format!("{} does not name a file", path.display()))
            })?
            .to_owned();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        Dir::create_ambient_dir_all(parent, ambient_authority())
            .map_err(|err| Self::io_error(parent, &err))?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| Self::io_error(parent, &err))?;

        Ok(Self {
            dir: Arc::new(dir),
            file_name,
            path: path.to_path_buf(),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(path: &Path, err: &io::Error) -> UserStoreError {
        UserStoreError::io(format!("{}: {err}", path.display()))
    }

    fn read_blocking(dir: &Dir, file_name: &str, path: &Path) -> Result<Vec<User>, UserStoreError> {
        let contents = match dir.read_to_string(file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "user store file missing; treating as empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(Self::io_error(path, &err)),
        };

        serde_json::from_str(&contents)
            .map_err(|err| UserStoreError::parse(format!("{}: {err}", path.display())))
    }

    async fn run_blocking<T, F>(task: F) -> Result<T, UserStoreError>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, UserStoreError> + Send + 'static,
    {
        tokio::task::spawn_blocking(task)
            .await
            .map_err(|err| UserStoreError::io(format!("blocking store task failed: {err}")))?
    }
}

#[async_trait]
impl UserStore for JsonFileUserStore {
    async fn read_all(&self) -> Result<Vec<User>, UserStoreError> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let path = self.path.clone();
        Self::run_blocking(move || Self::read_blocking(&dir, &file_name, &path)).await
    }

    async fn write_all(&self, users: &[User]) -> Result<(), UserStoreError> {
        let contents = serde_json::to_string_pretty(users)
            .map_err(|err| UserStoreError::serialize(err.to_string()))?;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let path = self.path.clone();
        Self::run_blocking(move || {
            dir.write(&file_name, contents)
                .map_err(|err| Self::io_error(&path, &err))
        })
        .await
    }
}
