use std::path::Path;

use crate::models::dir_entry::FilePermission;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
    Execute,
}

/// Checks one access mode for the current process. Any failure, including the
/// path having vanished, is reported as `false`.
pub fn probe(path: &Path, mode: AccessMode) -> bool {
    imp::probe(path, mode)
}

/// Each mode is probed on its own; a denied mode never skips the others.
pub fn probe_all(path: &Path) -> FilePermission {
    FilePermission {
        read: probe(path, AccessMode::Read),
        write: probe(path, AccessMode::Write),
        execute: probe(path, AccessMode::Execute),
    }
}

#[cfg(unix)]
mod imp {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;
    use std::path::Path;

    use super::AccessMode;

    pub fn probe(path: &Path, mode: AccessMode) -> bool {
        let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
            return false;
        };
        let flag = match mode {
            AccessMode::Read => libc::R_OK,
            AccessMode::Write => libc::W_OK,
            AccessMode::Execute => libc::X_OK,
        };
        // SAFETY: c_path is a valid NUL-terminated string that outlives the call.
        unsafe { libc::access(c_path.as_ptr(), flag) == 0 }
    }
}

#[cfg(not(unix))]
mod imp {
    use std::path::Path;

    use super::AccessMode;

    // No access(2) here; derive what the host metadata reports.
    pub fn probe(path: &Path, mode: AccessMode) -> bool {
        let Ok(metadata) = std::fs::metadata(path) else {
            return false;
        };
        match mode {
            AccessMode::Read => true,
            AccessMode::Write => !metadata.permissions().readonly(),
            AccessMode::Execute => {
                metadata.is_dir()
                    || path
                        .extension()
                        .map(|ext| {
                            let ext = ext.to_string_lossy().to_ascii_lowercase();
                            matches!(ext.as_str(), "exe" | "bat" | "cmd" | "com")
                        })
                        .unwrap_or(false)
            }
        }
    }
}
