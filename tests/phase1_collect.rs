mod common;

use common::create_fixture;
use lstree::tree::{collect, Entry, EntryKind};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

fn no_ignores() -> BTreeSet<String> {
    BTreeSet::new()
}

fn names(entries: &[Entry]) -> Vec<String> {
    entries.iter().map(|e| e.name.clone()).collect()
}

// --- Sorting ---

#[test]
fn test_sorted_names_are_non_decreasing() {
    let tmp = create_fixture(&["src/", "README.md", "build/", "main.rs", "Cargo.toml"]);
    let entries = collect(tmp.path(), &no_ignores(), true).unwrap();
    let got = names(&entries);
    assert_eq!(got, vec!["Cargo.toml", "README.md", "build", "main.rs", "src"]);
}

#[test]
fn test_unsorted_listing_has_same_members() {
    let tmp = create_fixture(&["c", "a/", "b"]);
    let entries = collect(tmp.path(), &no_ignores(), false).unwrap();
    let got: BTreeSet<String> = names(&entries).into_iter().collect();
    let want: BTreeSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    assert_eq!(got, want);
}

#[test]
fn test_entry_paths_and_kinds() {
    let tmp = create_fixture(&["dir/", "file.txt"]);
    let entries = collect(tmp.path(), &no_ignores(), true).unwrap();
    assert_eq!(entries[0].path, tmp.path().join("dir"));
    assert_eq!(entries[0].kind, EntryKind::Directory);
    assert_eq!(entries[1].path, tmp.path().join("file.txt"));
    assert_eq!(entries[1].kind, EntryKind::File);
}

#[test]
fn test_only_immediate_children_are_listed() {
    let tmp = create_fixture(&["a/b/c/d.txt", "top.txt"]);
    let entries = collect(tmp.path(), &no_ignores(), true).unwrap();
    assert_eq!(names(&entries), vec!["a", "top.txt"]);
}

// --- Ignore list ---

#[test]
fn test_ignore_is_exact_not_prefix_or_glob() {
    let tmp = create_fixture(&["build/", "builder/", ".build", "app.log", "b*"]);
    let ignore: BTreeSet<String> = ["build", "*.log"].iter().map(|s| s.to_string()).collect();
    let entries = collect(tmp.path(), &ignore, true).unwrap();
    assert_eq!(names(&entries), vec![".build", "app.log", "b*", "builder"]);
}

#[test]
fn test_ignore_matches_files_and_directories() {
    let tmp = create_fixture(&["node_modules/pkg/", "notes", "src/"]);
    let ignore: BTreeSet<String> = ["node_modules", "notes"].iter().map(|s| s.to_string()).collect();
    let entries = collect(tmp.path(), &ignore, true).unwrap();
    assert_eq!(names(&entries), vec!["src"]);
}

// --- Special entries ---

#[test]
#[cfg(unix)]
fn test_fifo_is_skipped() {
    let tmp = create_fixture(&["a.txt"]);
    if !common::make_fifo(&tmp.path().join("pipe")) {
        return;
    }
    let entries = collect(tmp.path(), &no_ignores(), true).unwrap();
    assert_eq!(names(&entries), vec!["a.txt"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_sorted_listing_matches_bytewise_order(
        wanted in prop::collection::btree_set("[a-z0-9_][a-z0-9_.-]{0,7}", 0..12)
    ) {
        let tmp = TempDir::new().unwrap();
        for (i, name) in wanted.iter().enumerate() {
            if i % 2 == 0 {
                fs::create_dir(tmp.path().join(name)).unwrap();
            } else {
                fs::write(tmp.path().join(name), "").unwrap();
            }
        }
        let entries = collect(tmp.path(), &BTreeSet::new(), true).unwrap();
        let got = names(&entries);
        let want: Vec<String> = wanted.into_iter().collect();
        prop_assert_eq!(got, want);
    }
}
