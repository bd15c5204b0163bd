use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use context::CopyContext;
use error::*;

/// Source files paired with where they will be copied, in discovery order.
#[derive(Debug, Default, PartialEq)]
pub struct PathMap {
    entries: Vec<(PathBuf, PathBuf)>,
}

impl PathMap {
    pub fn new() -> PathMap {
        PathMap { entries: Vec::new() }
    }

    pub fn insert(&mut self, source: PathBuf, destination: PathBuf) {
        self.entries.push((source, destination));
    }

    pub fn iter(&self) -> ::std::slice::Iter<(PathBuf, PathBuf)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps every file under the source directory onto the destination directory.
///
/// Files of a directory come before the contents of its subdirectories, which
/// are visited depth first in listing order. Subdirectories named like the
/// excluded directory (ignoring case) are skipped along with their contents.
/// Symbolic links are followed; one leading back to its own ancestor is
/// skipped with a warning.
pub fn populate_path_map(file_context: &CopyContext) -> Result<PathMap> {
    let mut path_map = PathMap::new();
    let excluded_dir = file_context.excluded_dir.clone();
    let walker = WalkDir::new(&file_context.source_dir)
        .follow_links(true)
        .sort_by(|a, b| a.path().is_dir().cmp(&b.path().is_dir()))
        .into_iter()
        .filter_entry(move |entry| {
            let excluded = entry.depth() > 0 && entry.file_type().is_dir()
                && is_excluded_directory(entry.path(), &excluded_dir);
            if excluded {
                debug!("Skipping excluded directory: {}", entry.path().to_string_lossy());
            }
            !excluded
        });

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(error) => {
                if let Some(ancestor) = error.loop_ancestor() {
                    warn!("Skipping symlink loop back to {}", ancestor.to_string_lossy());
                    continue;
                }
                return Err(error).chain_err(|| {
                    format!(
                        "Unable to read directory tree {}",
                        file_context.source_dir.to_string_lossy()
                    )
                });
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let destination = destination_path(file_context, entry.path())?;
        trace!("Mapped {} -> {}", entry.path().to_string_lossy(), destination.to_string_lossy());
        path_map.insert(entry.into_path(), destination);
    }

    Ok(path_map)
}

fn destination_path(file_context: &CopyContext, source_file: &Path) -> Result<PathBuf> {
    let relative = source_file.strip_prefix(&file_context.source_dir).chain_err(|| {
        format!(
            "Internal failure: File {} is not under {}. This is a bug.",
            source_file.to_string_lossy(),
            file_context.source_dir.to_string_lossy()
        )
    })?;
    Ok(file_context.dest_dir.join(relative))
}

fn is_excluded_directory(directory: &Path, excluded_dir: &str) -> bool {
    match directory.file_name() {
        Some(name) => name.to_string_lossy().to_lowercase() == excluded_dir.to_lowercase(),
        None => false,
    }
}
