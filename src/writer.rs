use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Writes `data` to `path`, creating missing parent directories first.
///
/// An existing file at `path` is overwritten.
///
/// # Errors
/// * `Error::DirectoryCreateError` if a parent directory cannot be created
/// * `Error::OutputWriteError` if the file itself cannot be written
pub fn write_output<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreateError {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    debug!("Writing {} bytes to {}", data.len(), path.display());
    fs::write(path, data)
        .map_err(|source| Error::OutputWriteError { path: path.to_path_buf(), source })
}
