//! On-disk record format: YAML wrapped in gzip, written atomically.
pub mod gzip;

use crate::error::{persistence_error, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};
use tempfile::NamedTempFile;

/// Reads a record, `None` if the file does not exist.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(persistence_error(path)(e)),
    };
    gzip::decode(BufReader::new(file), path).map(Some)
}

/// Replaces the file with `value`. Readers see either the old or the new record.
pub fn store<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(persistence_error(parent))?;
    let temp = NamedTempFile::new_in(parent).map_err(persistence_error(parent))?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        gzip::encode(&mut writer, value, path)?;
        writer.flush().map_err(persistence_error(temp.path()))?;
    }
    temp.as_file()
        .sync_all()
        .map_err(persistence_error(temp.path()))?;
    temp.persist(path).map_err(|e| persistence_error(path)(e.error))?;
    Ok(())
}

/// Removes the file; a missing file is not an error.
pub fn remove(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(persistence_error(path)(e)),
        _ => Ok(()),
    }
}
