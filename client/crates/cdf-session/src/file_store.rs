use crate::{SessionError, SessionResult, SessionStore};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

/// Token store backed by a single file on disk.
///
/// The file holds the raw bearer string and nothing else. It is re-read on
/// every [`SessionStore::get`] so a login from another shell is picked up
/// without restarting.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("token"));
        self.path
            .with_file_name(format!("{file_name}.tmp.{}", std::process::id()))
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> SessionResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    debug!("Token file {:?} is empty", self.path);
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::file_read(self.path.clone(), e)),
        }
    }

    /// Writes the token via temp file, fsync and rename so a crash mid-write
    /// never leaves a truncated token behind.
    fn set(&self, token: &str) -> SessionResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|e| SessionError::dir_creation(parent.to_path_buf(), e))?;
        }

        let temp_path = self.temp_path();

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                file.set_permissions(fs::Permissions::from_mode(0o600))
                    .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
            }

            file.write_all(token.as_bytes())
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SessionError::atomic_rename(temp_path.clone(), self.path.clone(), e)
        })?;

        info!("Stored session token at {:?}", self.path);
        Ok(())
    }

    fn clear(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed session token at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::file_remove(self.path.clone(), e)),
        }
    }
}
