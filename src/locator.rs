use std::path::{Path, PathBuf};

use log::debug;
use walkdir::{DirEntry, WalkDir};

/// File suffix identifying a project manifest.
pub const MANIFEST_EXTENSION: &str = ".csproj";

/// Directory names never descended into: the package cache and build output.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "bin", "obj"];

/// Default number of subdirectory levels searched below the root.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Find `*.csproj` files under `root`, descending at most `max_depth` directory levels.
///
/// Hidden directories, [`EXCLUDED_DIRS`] and any name in `extra_excludes` are pruned.
/// Directories that cannot be listed are skipped. Paths are returned in depth-first,
/// file-name order and each path appears once.
pub fn find_manifests(root: &Path, max_depth: usize, extra_excludes: &[String]) -> Vec<PathBuf> {
    // Files sit one level below the deepest directory we are allowed to list.
    let walker = WalkDir::new(root)
        .max_depth(max_depth.saturating_add(1))
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_pruned(e, extra_excludes));

    let mut manifests = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!("skipping unreadable path: {}", err);
                continue;
            }
        };

        if entry.file_type().is_file() && is_manifest(&entry) {
            manifests.push(entry.into_path());
        }
    }

    manifests
}

fn is_manifest(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.ends_with(MANIFEST_EXTENSION))
}

fn is_pruned(entry: &DirEntry, extra_excludes: &[String]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    let pruned = name.starts_with('.')
        || EXCLUDED_DIRS.contains(&name.as_ref())
        || extra_excludes.iter().any(|e| e == name.as_ref());
    if pruned {
        debug!("pruning {}", entry.path().display());
    }
    pruned
}
