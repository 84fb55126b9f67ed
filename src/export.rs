//! One-shot static export of every rendered page.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::clock::Clock;
use crate::error::StorefrontError;
use crate::ui::render::{Page, render_page};

/// Pages written by [`export_site`].
pub const EXPORTED_PAGES: [Page; 2] = [Page::Landing, Page::NotFound];

/// Render every page into `dir`, creating it if needed.
///
/// Returns the written paths in [`EXPORTED_PAGES`] order.
pub fn export_site(dir: &Path, clock: &dyn Clock) -> Result<Vec<PathBuf>, StorefrontError> {
    std::fs::create_dir_all(dir).map_err(|source| StorefrontError::Export {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(EXPORTED_PAGES.len());
    for page in EXPORTED_PAGES {
        let path = dir.join(page.file_name());
        std::fs::write(&path, render_page(page, clock)).map_err(|source| {
            StorefrontError::Export {
                path: path.clone(),
                source,
            }
        })?;
        info!(name: "export.page.written", page = ?page, path = %path.display(), "Page exported");
        written.push(path);
    }

    Ok(written)
}
