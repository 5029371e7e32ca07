use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use walkdir::WalkDir;

/// Extensions offered by the desktop file dialog.
pub const PICKER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Extensions offered by the browser file input: every format the enabled
/// decoders can read.
pub const BROWSER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

pub fn is_pickable_image(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ref ext) if PICKER_EXTENSIONS.contains(&ext.as_str())
    )
}

pub fn collect_images(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(anyhow!("{} does not exist", root.display()));
    }
    if !root.is_dir() {
        return Err(anyhow!("{} is not a directory", root.display()));
    }

    let mut files = Vec::new();
    if recursive {
        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file() && is_pickable_image(entry.path()) {
                files.push(entry.path().to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(root)
            .with_context(|| format!("Unable to read directory {}", root.display()))?
        {
            let entry =
                entry.with_context(|| format!("Unable to read entry in {}", root.display()))?;
            let path = entry.path();
            if path.is_file() && is_pickable_image(&path) {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Expands command-line arguments into image files. Directories are scanned,
/// files are kept as given as long as they carry a pickable extension.
pub fn collect_startup_paths(args: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for arg in args {
        if arg.is_dir() {
            files.extend(collect_images(arg, recursive)?);
        } else if !arg.exists() {
            return Err(anyhow!("{} does not exist", arg.display()));
        } else if is_pickable_image(arg) {
            files.push(arg.clone());
        } else {
            tracing::warn!(
                "Ignoring {}: supported formats are {}",
                arg.display(),
                PICKER_EXTENSIONS.join(", ")
            );
        }
    }
    Ok(files)
}
