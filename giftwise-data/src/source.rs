//! Capability-based file access for export files.
#![forbid(unsafe_code)]

use std::io::{self, BufReader};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use serde_json::Value;

use crate::DataError;

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
/// Propagates the underlying I/O error.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether `path` exists and is a regular file.
///
/// # Errors
/// Returns the I/O error raised while inspecting the parent directory or the
/// file itself; a missing file surfaces as [`io::ErrorKind::NotFound`].
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Read a JSON array from `path`, keeping each element as a raw value so
/// callers can map records individually.
pub(crate) fn read_records(path: &Utf8Path) -> Result<Vec<Value>, DataError> {
    let file = open_utf8_file(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
