// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Zip packaging of an artifact directory.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::ZipWriter;

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to assemble archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Package `dir` (recursively) into an in-memory zip, entry names relative
/// to `dir`.
pub fn zip_dir(dir: &Path) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    add_entries(&mut writer, dir, "", options)?;
    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

fn add_entries(
    writer: &mut ZipWriter<Cursor<Vec<u8>>>,
    root: &Path,
    prefix: &str,
    options: FileOptions,
) -> Result<(), ArchiveError> {
    let dir = root.join(prefix);
    let entries =
        std::fs::read_dir(&dir).map_err(|source| ArchiveError::Io { path: dir.clone(), source })?;

    let mut paths: Vec<PathBuf> = entries.filter_map(Result::ok).map(|e| e.path()).collect();
    paths.sort();

    for path in paths {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        let entry_name =
            if prefix.is_empty() { name.to_string() } else { format!("{prefix}/{name}") };

        if path.is_dir() {
            writer.add_directory(entry_name.as_str(), options)?;
            add_entries(writer, root, &entry_name, options)?;
        } else {
            let bytes = std::fs::read(&path)
                .map_err(|source| ArchiveError::Io { path: path.clone(), source })?;
            writer.start_file(entry_name.as_str(), options)?;
            writer
                .write_all(&bytes)
                .map_err(|source| ArchiveError::Io { path: path.clone(), source })?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
