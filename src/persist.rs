//! Disk I/O helpers: load the collection and replace the file atomically.
//!
//! The rename-over approach is close to atomic on local filesystems. On FAT32
//! or network shares there are no hard guarantees.

use crate::error::{Error, Result};
use crate::person::People;
use crate::serializer::Serializer;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads and decodes the file at `path`.
///
/// Returns `Ok(None)` when the file does not exist, an empty collection when
/// the file is zero bytes, and [`Error::Decode`] when the contents are not a
/// valid collection or repeat an id.
pub fn load<S>(path: &Path, serializer: &S) -> Result<Option<People>>
where
    S: Serializer,
{
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::Io(format!("reading {}: {e}", path.display()))),
    };
    if bytes.is_empty() {
        debug!(path = %path.display(), "backing file is empty, starting with no records");
        return Ok(Some(People::default()));
    }
    let people = serializer.deserialize(&bytes).map_err(|e| match e {
        Error::Decode(msg) => Error::Decode(format!("{}: {msg}", path.display())),
        other => other,
    })?;
    if let Some(id) = people.first_duplicate() {
        return Err(Error::Decode(format!(
            "{}: id {id} appears more than once",
            path.display()
        )));
    }
    debug!(path = %path.display(), records = people.people.len(), "loaded collection");
    Ok(Some(people))
}

/// Sibling path used while writing: the full file name plus `.tmp`, so
/// `people.json` becomes `people.json.tmp` and `people` becomes `people.tmp`.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("people"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `bytes` to the temp sibling, sync it, then rename over `path`. A
/// crash at any point leaves either the old or the new file, never a mix.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = temp_path(path);
    let res = write_synced(&tmp, bytes).and_then(|()| {
        fs::rename(&tmp, path).map_err(|e| {
            Error::Io(format!(
                "renaming {} over {}: {e}",
                tmp.display(),
                path.display()
            ))
        })
    });
    if res.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    res
}

fn write_synced(tmp: &Path, bytes: &[u8]) -> Result<()> {
    let mut file =
        File::create(tmp).map_err(|e| Error::Io(format!("creating {}: {e}", tmp.display())))?;
    file.write_all(bytes)
        .map_err(|e| Error::Io(format!("writing {}: {e}", tmp.display())))?;
    file.sync_all()
        .map_err(|e| Error::Io(format!("syncing {}: {e}", tmp.display())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_to_the_full_file_name() {
        assert_eq!(
            temp_path(Path::new("/data/people.json")),
            PathBuf::from("/data/people.json.tmp")
        );
        assert_eq!(
            temp_path(Path::new("/data/people")),
            PathBuf::from("/data/people.tmp")
        );
    }

    #[test]
    fn sibling_files_get_distinct_temp_paths() {
        let with_ext = temp_path(Path::new("/data/people.json"));
        let without_ext = temp_path(Path::new("/data/people"));
        assert_ne!(with_ext, without_ext);
    }
}
