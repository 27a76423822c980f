//! Copying input assets into the pack tree.

use super::list_files;
use crate::error::Result;
use std::path::Path;
use tracing::{debug, info, warn};

/// Copy every regular file in `source_dir` into `dest_dir`.
///
/// A file that fails to copy is logged and skipped. Returns the number of
/// files copied.
pub fn copy_files(source_dir: &Path, dest_dir: &Path) -> Result<usize> {
    info!(from = %source_dir.display(), to = %dest_dir.display(), "copying assets");
    std::fs::create_dir_all(dest_dir)?;

    let mut copied = 0;
    for path in list_files(source_dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);
        match std::fs::copy(&path, &dest) {
            Ok(_) => {
                debug!(file = %dest.display(), "copied");
                copied += 1;
            }
            Err(e) => warn!(file = %path.display(), "copy failed: {}", e),
        }
    }
    Ok(copied)
}
