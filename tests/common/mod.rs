#![allow(dead_code)]

use lstree::printer::render_tree;
use lstree::render::RenderConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// RenderConfig with the command-line defaults except for vertical spacing.
pub fn config_with_y(y_spacing: usize) -> RenderConfig {
    RenderConfig {
        y_spacing,
        ..RenderConfig::default()
    }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    populate(tmp.path(), paths);
    tmp
}

/// Like `create_fixture`, but everything lives under `tmp/<root>/`.
pub fn create_named_fixture(root: &str, paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join(root);
    fs::create_dir_all(&base).unwrap();
    populate(&base, paths);
    tmp
}

fn populate(base: &Path, paths: &[&str]) {
    for p in paths {
        let full = base.join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
}

/// Render `path` into a String, panicking on any error.
pub fn render_to_string(path: &Path, config: &RenderConfig) -> String {
    let mut out = Vec::new();
    render_tree(&mut out, path, config).unwrap();
    String::from_utf8(out).unwrap()
}

/// Create a named pipe at `path`. Returns false where `mkfifo` is unavailable.
#[cfg(unix)]
pub fn make_fifo(path: &Path) -> bool {
    matches!(
        std::process::Command::new("mkfifo").arg(path).status(),
        Ok(s) if s.success()
    )
}
