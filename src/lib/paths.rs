//! Shared path helpers reused across modules.

use std::path::{Path, PathBuf};

/// Subdirectory of the viewer workspace checked before a setup step.
pub fn workspace_subdir(viewer_dir: &Path, name: &str) -> PathBuf {
    viewer_dir.join(name)
}
