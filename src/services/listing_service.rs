use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::dir_entry::{is_hidden_name, EntryInfo};
use crate::services::access_probe;

/// A child name as read from the directory, before any metadata is collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirChild {
    pub name: String,
    pub uri: PathBuf,
}

/// Lists `dir` and describes every surviving child, in scan order.
///
/// Fails only when `dir` itself cannot be enumerated. Children that disappear
/// while the listing is built are left out of the result.
pub fn list(dir: &Path, include_hidden: bool) -> Result<Vec<EntryInfo>, AppError> {
    let children = enumerate(dir)?;
    Ok(collect_entries(children, include_hidden))
}

/// Reads the immediate children of `dir`. Any error, including one hit part
/// way through the scan, aborts with `AppError::Enumeration`.
pub fn enumerate(dir: &Path) -> Result<Vec<DirChild>, AppError> {
    let read_dir = fs::read_dir(dir).map_err(|e| {
        tracing::warn!(path = %dir.display(), error = %e, "directory enumeration failed");
        AppError::enumeration(dir, e)
    })?;

    let mut children = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| {
            tracing::warn!(path = %dir.display(), error = %e, "directory scan interrupted");
            AppError::enumeration(dir, e)
        })?;
        let name = entry.file_name().to_string_lossy().to_string();
        children.push(DirChild {
            uri: dir.join(entry.file_name()),
            name,
        });
    }
    Ok(children)
}

pub fn collect_entries(children: Vec<DirChild>, include_hidden: bool) -> Vec<EntryInfo> {
    children
        .into_iter()
        .filter(|child| include_hidden || !is_hidden_name(&child.name))
        .filter(|child| {
            let exists = child.uri.exists();
            if !exists {
                tracing::debug!(uri = %child.uri.display(), "entry gone before metadata read");
            }
            exists
        })
        .filter_map(|child| describe_entry(&child))
        .collect()
}

/// Gathers the metadata for one child. Returns `None` when the entry can no
/// longer be described, which the listing treats as "not present".
pub fn describe_entry(child: &DirChild) -> Option<EntryInfo> {
    let uri = &child.uri;

    // classify the entry itself; a link to a directory is not a directory
    let is_directory = match fs::symlink_metadata(uri) {
        Ok(meta) => meta.is_dir(),
        Err(e) => return skip(uri, &e),
    };
    let metadata = match fs::metadata(uri) {
        Ok(meta) => meta,
        Err(e) => return skip(uri, &e),
    };

    let items_count = if is_directory {
        match count_children(uri) {
            Ok(count) => Some(count),
            Err(e) => return skip(uri, &e),
        }
    } else {
        None
    };

    Some(EntryInfo {
        uri: uri.to_string_lossy().to_string(),
        is_directory,
        is_hidden: is_hidden_name(&child.name),
        items_count,
        size_in_bytes: metadata.len(),
        permission: access_probe::probe_all(uri),
    })
}

/// Immediate children of `dir`, hidden ones included.
pub fn count_children(dir: &Path) -> io::Result<u64> {
    fs::read_dir(dir)?.try_fold(0u64, |count, entry| entry.map(|_| count + 1))
}

fn skip(uri: &Path, err: &io::Error) -> Option<EntryInfo> {
    if err.kind() == io::ErrorKind::NotFound {
        tracing::debug!(uri = %uri.display(), "entry vanished during listing");
    } else {
        tracing::warn!(uri = %uri.display(), error = %err, "dropping entry with unreadable metadata");
    }
    None
}
