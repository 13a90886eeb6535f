//! On-disk copy of the current session.

use crate::{ClientError, ClientResult};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use falcon_core::Session;
use log::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted session.
    ///
    /// A missing file means "never signed in". An unreadable or corrupted
    /// file is logged and also treated as no session.
    pub fn load(&self) -> Option<Session> {
        if !self.path.exists() {
            debug!("No session file at {:?}", self.path);
            return None;
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read session file {:?}: {e}", self.path);
                return None;
            }
        };

        match serde_json::from_str::<Session>(&contents) {
            Ok(session) => {
                info!("Restored session for {}", session.user.id);
                Some(session)
            }
            Err(e) => {
                warn!("Session file corrupted at {:?}: {e}", self.path);
                None
            }
        }
    }

    /// Save using temp file, fsync, then atomic rename.
    pub fn save(&self, session: &Session) -> ClientResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| ClientError::session_file(dir, e))?;
        }

        let temp_path = self.temp_path();
        let json = serde_json::to_string_pretty(session)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| ClientError::session_file(&temp_path, e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| ClientError::session_file(&temp_path, e))?;

            file.sync_all()
                .map_err(|e| ClientError::session_file(&temp_path, e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ClientError::session_file(&self.path, e)
        })?;

        debug!("Saved session for {}", session.user.id);
        Ok(())
    }

    /// Delete the file. Missing is fine.
    pub fn remove(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::session_file(&self.path, e)),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session.json".into());
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }
}
