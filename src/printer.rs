//! Depth-first traversal that prints each entry as it is reached.

use std::fmt;
use std::io::Write;
use std::path::{is_separator, Path, MAIN_SEPARATOR};

use tracing::{debug, trace};

use crate::render::{entry_line, RenderConfig};
use crate::tree::walk::kind_of;
use crate::tree::{collect, sibling_state, EntryKind, LevelStates, Result, TreeError};

/// Running totals of what the traversal has printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub directories: usize,
    pub files: usize,
}

impl Counts {
    pub fn total(&self) -> usize {
        self.directories + self.files
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dirs = if self.directories == 1 {
            "directory"
        } else {
            "directories"
        };
        let files = if self.files == 1 { "file" } else { "files" };
        write!(f, "{} {}, {} {}", self.directories, dirs, self.files, files)
    }
}

/// Prints a tree to `out`, one line per entry, parent before children.
///
/// Owns the level-state table and counters for a single run, so two printers
/// never share state.
pub struct TreePrinter<'a, W: Write> {
    out: W,
    config: &'a RenderConfig,
    levels: LevelStates,
    counts: Counts,
    lines_written: usize,
}

impl<'a, W: Write> TreePrinter<'a, W> {
    pub fn new(out: W, config: &'a RenderConfig) -> Self {
        Self {
            out,
            config,
            levels: LevelStates::new(),
            counts: Counts::default(),
            lines_written: 0,
        }
    }

    /// Print the tree rooted at `path` and return the final counts.
    ///
    /// A directory target counts itself as one directory. A file target is
    /// printed on its own and counts as one file.
    pub fn print(mut self, path: &Path) -> Result<Counts> {
        self.visit(path, 0)?;
        self.out.flush().map_err(|e| TreeError::io(path, e))?;
        Ok(self.counts)
    }

    fn visit(&mut self, path: &Path, depth: usize) -> Result<()> {
        match validate(path)? {
            EntryKind::File => {
                self.counts.files += 1;
                let name = display_name(path, depth, false);
                self.emit(&name, depth, path)
            }
            EntryKind::Directory => {
                self.counts.directories += 1;
                let name = display_name(path, depth, true);
                self.emit(&name, depth, path)?;
                self.visit_children(path, depth + 1)
            }
        }
    }

    fn visit_children(&mut self, dir: &Path, depth: usize) -> Result<()> {
        let children = collect(dir, &self.config.ignore, self.config.sort)?;
        let count = children.len();
        debug!(dir = %dir.display(), depth, count, "rendering children");

        for (index, child) in children.iter().enumerate() {
            self.levels.set(depth, sibling_state(index, count));
            match child.kind {
                EntryKind::File => {
                    self.counts.files += 1;
                    self.emit(&child.name, depth, &child.path)?;
                }
                EntryKind::Directory => self.visit(&child.path, depth)?,
            }
        }
        Ok(())
    }

    fn emit(&mut self, name: &str, depth: usize, path: &Path) -> Result<()> {
        let at_start = self.lines_written == 0;
        let line = entry_line(name, depth, self.config, &self.levels, at_start)?;
        trace!(path = %path.display(), depth, "emit");
        writeln!(self.out, "{line}").map_err(|e| TreeError::io(path, e))?;
        self.lines_written += 1;
        Ok(())
    }
}

/// Check that `path` names something printable and say which kind it is.
fn validate(path: &Path) -> Result<EntryKind> {
    if path.as_os_str().is_empty() {
        return Err(TreeError::EmptyPath);
    }
    let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => TreeError::InvalidPath(path.to_path_buf()),
        _ => TreeError::io(path, e),
    })?;
    kind_of(metadata.file_type()).ok_or_else(|| TreeError::InvalidPath(path.to_path_buf()))
}

/// The root shows the path exactly as given; anything deeper shows only its
/// final component. Directories always end in a separator.
fn display_name(path: &Path, depth: usize, is_dir: bool) -> String {
    let mut name = match (depth, path.file_name()) {
        (0, _) | (_, None) => path.to_string_lossy().into_owned(),
        (_, Some(file_name)) => file_name.to_string_lossy().into_owned(),
    };
    if is_dir && !name.ends_with(is_separator) {
        name.push(MAIN_SEPARATOR);
    }
    name
}

/// Print the tree for `path` followed by a blank line and the summary.
pub fn render_tree<W: Write>(out: &mut W, path: &Path, config: &RenderConfig) -> Result<Counts> {
    let counts = TreePrinter::new(&mut *out, config).print(path)?;
    writeln!(out)
        .and_then(|_| writeln!(out, "{counts}"))
        .and_then(|_| out.flush())
        .map_err(|e| TreeError::io(path, e))?;
    Ok(counts)
}
