//! Copying template sets into the target tree

use super::store::{TemplateSet, TemplateStore};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Materialize every entry of `set` under `dest_root`.
///
/// The reserved manifest entry is skipped, destination directories are
/// created as needed, the sentinel rename is already encoded in each
/// descriptor's `dest_name`, and existing files are overwritten
/// unconditionally so re-running is idempotent.
pub async fn materialize<S: TemplateStore>(
    store: &S,
    set: TemplateSet,
    dest_root: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for entry in store.entries(set) {
        if entry.reserved() {
            continue;
        }

        let dest = dest_root.join(&entry.dest_name);

        if entry.is_dir {
            fs::create_dir_all(&dest)
                .await
                .map_err(|e| Error::fs(&dest, e))?;
            continue;
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::fs(parent, e))?;
        }

        let bytes = store.read(set, &entry)?;
        fs::write(&dest, &bytes)
            .await
            .map_err(|e| Error::fs(&dest, e))?;
        written.push(dest);
    }

    Ok(written)
}
