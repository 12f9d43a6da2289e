use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::records::Pet;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create export file at {path}: {source}")]
    Create {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write export file at {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to serialise pet collection: {0}")]
    Serialise(#[from] serde_json::Error),
}

/// Writes the collection to `path` as a pretty-printed JSON array.
///
/// The dump is one-shot: the file is truncated and rewritten in full on every
/// call. The array element shape matches the serde layout of [`Pet`]. The
/// buffered writer is flushed explicitly; deferred write failures (a full
/// disk, for instance) surface as [`ExportError::Write`] instead of being
/// lost in the drop.
pub fn save_pets(pets: &[Pet], path: &Path) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.display().to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, pets)?;
    writer.flush().map_err(|source| ExportError::Write {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = pets.len(), "saved pet collection");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_flat_json_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pets.json");

        save_pets(&[Pet::sample()], &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().expect("top-level JSON array");
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["id"], 1);
        assert_eq!(array[0]["school"], "MYTH");
    }

    #[test]
    fn empty_collection_writes_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pets.json");

        save_pets(&[], &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim(), "[]");
    }

    #[test]
    fn unwritable_path_reports_create_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-subdir").join("pets.json");

        let err = save_pets(&[], &path).unwrap_err();
        assert!(matches!(err, ExportError::Create { .. }));
    }

    // /dev/full accepts the open but fails every write with ENOSPC, so the
    // failure only shows up when the buffered writer flushes.
    #[cfg(target_os = "linux")]
    #[test]
    fn deferred_write_failure_surfaces_as_error() {
        let err = save_pets(&[], Path::new("/dev/full")).unwrap_err();
        assert!(matches!(err, ExportError::Write { .. }));
    }
}
