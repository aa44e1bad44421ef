//! JSON file persistence shared by both store backends.

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::ProfileError;

/// Read a JSON file into `T`.
///
/// A missing file yields `T::default()`. A file that is not valid JSON is
/// treated the same way (corrupt-file recovery) and logged.
pub(super) fn load_or_default<T>(path: &Path) -> Result<T, ProfileError>
where
    T: DeserializeOwned + Default,
{
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&contents).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "store file is corrupt, starting empty");
        T::default()
    }))
}

/// Atomically replace `path` with the JSON form of `value`.
///
/// Writes to a sibling `.tmp` file created owner-only on Unix, then renames
/// it over the target. On failure the `.tmp` file is removed.
pub(super) fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), ProfileError> {
    let tmp = tmp_path(path)?;
    let json = serde_json::to_string_pretty(value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    // A leftover from an interrupted write may carry wider permissions.
    remove_if_present(&tmp)?;

    let written = write_private(&tmp, json.as_bytes());
    if let Err(e) = written.and_then(|()| fs::rename(&tmp, path)) {
        if let Err(cleanup) = remove_if_present(&tmp) {
            warn!(path = %tmp.display(), error = %cleanup, "could not remove temporary store file");
        }
        return Err(e.into());
    }
    Ok(())
}

/// Create `path` (which must not exist) readable by the owner only and
/// write `bytes` to it.
fn write_private(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

fn tmp_path(path: &Path) -> Result<PathBuf, ProfileError> {
    let name = path.file_name().ok_or_else(|| {
        ProfileError::Storage(format!("store path has no file name: {}", path.display()))
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
