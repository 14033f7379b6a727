use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{Error, Result, STATUS_FILE_NAME};

/// Records the fan state somewhere outside tools can look at it.
pub trait StatusPersister {
    fn persist(&mut self, fan_is_on: bool) -> Result<()>;
}

/// Single character status file: `1` while the fan runs, `0` otherwise.
pub struct StatusFile {
    pub path: PathBuf,
}

impl StatusFile {
    /// Creates `dir` and any missing parents. The file itself is written on
    /// the first [`StatusPersister::persist`].
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|source| Error::Status {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(STATUS_FILE_NAME);
        info!("Status file: {}", path.display());
        Ok(Self { path })
    }
}

impl StatusPersister for StatusFile {
    fn persist(&mut self, fan_is_on: bool) -> Result<()> {
        let content = if fan_is_on { "1" } else { "0" };
        debug!("Writing {content} to {}", self.path.display());

        fs::write(&self.path, content).map_err(|source| Error::Status {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
pub(crate) use recording::RecordingStatus;
