use crate::domain::ports::ScriptStorage;
use crate::utils::error::{MapperError, Result};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Local filesystem storage using write-to-temp then rename.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    /// `{path}.tmp`, next to the destination so the rename stays on one filesystem.
    pub fn temp_path_for(path: &Path) -> PathBuf {
        let mut tmp: OsString = path.as_os_str().to_owned();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

fn write_error(path: &str, action: &str, err: std::io::Error) -> MapperError {
    MapperError::WriteError {
        path: path.to_string(),
        message: format!("{}: {}", action, err),
    }
}

impl ScriptStorage for LocalStorage {
    async fn write_atomic(&self, path: &str, data: &[u8]) -> Result<()> {
        let final_path = Path::new(path);
        let tmp_path = Self::temp_path_for(final_path);

        if let Some(parent) = final_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| write_error(path, "failed to create parent directory", e))?;
            }
        }

        tracing::debug!("Writing {} bytes to {}", data.len(), tmp_path.display());
        {
            let mut tmp_file = File::create(&tmp_path)
                .map_err(|e| write_error(path, "failed to create temporary file", e))?;
            tmp_file
                .write_all(data)
                .map_err(|e| write_error(path, "failed to write temporary file", e))?;
            tmp_file
                .sync_all()
                .map_err(|e| write_error(path, "failed to sync temporary file", e))?;
        }

        fs::rename(&tmp_path, final_path)
            .map_err(|e| write_error(path, "failed to rename temporary file", e))?;

        tracing::debug!("Renamed {} to {}", tmp_path.display(), final_path.display());
        Ok(())
    }
}
