use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::dump::{dump_with_index, DumpOptions, DumpReport};
use crate::error::Result;
use crate::index::Index;

const SOURCE_EXTENSIONS: &[&str] = &["c", "h", "cc", "cpp", "cxx", "hpp", "hh", "hxx", "m", "mm"];
const SKIPPED_DIRS: &[&str] = &[".git", "target", "build", "node_modules", "dist"];

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry.file_name().to_str().is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}

/// C-family sources below `root`, sorted by path.
pub fn find_all_source_files(root: impl AsRef<Path>) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        // the root itself is never skipped, whatever its name
        .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_source_file(e.path()))
        .map(DirEntry::into_path)
        .collect()
}

/// Dumps every file named in `paths`, expanding directories, in parallel.
///
/// An [`Index`] is created for each piece rayon splits the file list into,
/// so a worker may create several. Results come back in the order the
/// files were named.
pub fn dump_paths<P: AsRef<Path>>(
    paths: &[P],
    args: &[&str],
    options: &DumpOptions,
) -> Vec<(PathBuf, Result<DumpReport>)> {
    let files: Vec<PathBuf> = paths
        .iter()
        .flat_map(|p| {
            let p = p.as_ref();
            if p.is_dir() {
                find_all_source_files(p)
            } else {
                vec![p.to_path_buf()]
            }
        })
        .collect();
    debug!(files = files.len(), "dumping");

    files
        .into_par_iter()
        .map_init(
            || Index::new(false, false),
            |index, file| {
                let report = dump_with_index(index, &file, args, options);
                (file, report)
            },
        )
        .collect()
}
