use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fs::FileType;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::{Entry, EntryKind, Result};

/// List the immediate children of `dir`.
///
/// Children whose name is exactly one of `ignore` are dropped (no globbing,
/// case-sensitive). With `sort` the result is ordered by name, byte-wise
/// ascending, directories and files interleaved; without it the order is
/// whatever the OS enumerates.
///
/// Children that are neither a file nor a directory once symlinks are
/// followed (broken links, sockets, devices) are skipped with a warning so
/// that sibling positions are computed over what actually gets rendered.
pub fn collect(dir: &Path, ignore: &BTreeSet<String>, sort: bool) -> Result<Vec<Entry>> {
    let mut walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);
    if sort {
        walker = walker.sort_by(sort_cmp);
    }

    let mut entries = Vec::new();
    let mut ignored = 0usize;

    for entry_result in walker {
        let entry = entry_result?;
        let name = entry.file_name().to_string_lossy().into_owned();

        if ignore.contains(&name) {
            ignored += 1;
            continue;
        }

        let Some(kind) = classify(&entry) else {
            warn!(path = %entry.path().display(), "skipping entry that is not a file or directory");
            continue;
        };

        entries.push(Entry {
            name,
            path: entry.path().to_path_buf(),
            kind,
        });
    }

    debug!(
        dir = %dir.display(),
        kept = entries.len(),
        ignored,
        sorted = sort,
        "collected children"
    );
    Ok(entries)
}

/// Resolve what an entry is, looking through symlinks.
fn classify(entry: &DirEntry) -> Option<EntryKind> {
    let file_type = if entry.path_is_symlink() {
        std::fs::metadata(entry.path()).ok()?.file_type()
    } else {
        entry.file_type()
    };
    kind_of(file_type)
}

pub(crate) fn kind_of(file_type: FileType) -> Option<EntryKind> {
    if file_type.is_dir() {
        Some(EntryKind::Directory)
    } else if file_type.is_file() {
        Some(EntryKind::File)
    } else {
        None
    }
}

/// Byte-wise name order, no special treatment for directories or dotfiles.
fn sort_cmp(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_name().cmp(b.file_name())
}
