use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{AssembleError, Result};

/// A directory entry whose name ends with the frame suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFile {
    pub name: String,
    pub path: PathBuf,
}

/// A frame file with its playback position parsed from the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameEntry {
    /// Integer value of the file name minus the suffix.
    pub index: u64,
    pub name: String,
    pub path: PathBuf,
}

/// List the entries in `dir` whose name ends with `suffix`.
///
/// Nothing matching is dropped here: a directory named `5.png` fails at decode
/// and an undecodable name fails at ordering. The result is in directory
/// listing order, which is unspecified.
pub fn scan_frames(dir: &Path, suffix: &str) -> Result<Vec<FrameFile>> {
    if !dir.is_dir() {
        return Err(AssembleError::MissingInputDir(dir.to_path_buf()));
    }

    let read_err = |source| AssembleError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();

        // Non UTF-8 names are kept lossily so they fail ordering instead of vanishing.
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(suffix) {
            continue;
        }
        if !path.is_file() {
            warn!(?path, "matching entry is not a regular file, decoding it will fail");
        }

        debug!(%name, "found frame file");
        files.push(FrameFile { name, path });
    }

    info!(?dir, suffix, count = files.len(), "directory scan complete");
    Ok(files)
}

/// Order frame files by the integer in their name.
///
/// Fails on the first name whose stem does not parse, before anything is decoded.
/// Equal indices (`1.png`, `01.png`) fall back to name order.
pub fn sort_frames(files: Vec<FrameFile>, suffix: &str) -> Result<Vec<FrameEntry>> {
    let mut entries = files
        .into_iter()
        .map(|file| {
            let index = parse_index(&file.name, suffix)?;
            Ok(FrameEntry {
                index,
                name: file.name,
                path: file.path,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    entries.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.name.cmp(&b.name)));

    if let (Some(first), Some(last)) = (entries.first(), entries.last()) {
        info!(
            count = entries.len(),
            first = first.index,
            last = last.index,
            "frames ordered"
        );
    }
    Ok(entries)
}

fn parse_index(name: &str, suffix: &str) -> Result<u64> {
    name.strip_suffix(suffix)
        .and_then(|stem| stem.parse::<u64>().ok())
        .ok_or_else(|| AssembleError::NonNumericName {
            name: name.to_string(),
        })
}
