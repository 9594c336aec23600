//! Glyph formatting: connectors, bars and padding for a single tree line.

use crate::tree::{IterationState, LevelStates, Result};
use std::collections::BTreeSet;

/// Immutable settings for one run, shared by every recursive call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces per indent level, and length of the horizontal bar.
    pub x_spacing: usize,
    /// Bar-only lines inserted before every non-root entry.
    pub y_spacing: usize,
    /// Order siblings by name.
    pub sort: bool,
    /// Child names to leave out, matched exactly.
    pub ignore: BTreeSet<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            x_spacing: 3,
            y_spacing: 1,
            sort: true,
            ignore: BTreeSet::new(),
        }
    }
}

const TEE: &str = "\u{251c}"; // ├
const ELBOW: &str = "\u{2514}"; // └
const VERTICAL: &str = "\u{2502}"; // │
const HORIZONTAL: &str = "\u{2500}"; // ─

/// Connector drawn in front of an entry's bar.
pub fn connector_glyph(state: IterationState) -> &'static str {
    match state {
        IterationState::Iterating => TEE,
        IterationState::Last => ELBOW,
        IterationState::Root => "",
    }
}

/// `spacing` horizontal-line characters.
pub fn horizontal_bar(spacing: usize) -> String {
    HORIZONTAL.repeat(spacing)
}

/// Indentation for an entry at `depth`, built from the states of ancestor
/// depths `1..depth`, shallowest first.
///
/// An ancestor that still has siblings to come contributes a continuation
/// bar plus `spacing` blanks; a finished one contributes `spacing + 1` blanks.
pub fn vertical_padding(depth: usize, spacing: usize, levels: &LevelStates) -> Result<String> {
    let mut padding = String::new();
    for level in 1..depth {
        match levels.get(level)? {
            IterationState::Iterating => padding.push_str(VERTICAL),
            IterationState::Last | IterationState::Root => padding.push(' '),
        }
        padding.extend(std::iter::repeat(' ').take(spacing));
    }
    Ok(padding)
}

/// The full text printed for one entry, without the trailing newline.
///
/// A `Root` entry is just its name. Anything else is preceded by
/// `config.y_spacing` bar-only gap lines (omitted when `at_start` is set, so
/// output never opens with a gap) and then padding, connector, bar and name.
///
/// `TreePrinter` always writes a `Root` line first, so `at_start` only matters
/// to callers that format lines without one.
pub fn entry_line(
    name: &str,
    depth: usize,
    config: &RenderConfig,
    levels: &LevelStates,
    at_start: bool,
) -> Result<String> {
    let name = sanitize_terminal_text(name);
    let state = levels.get(depth)?;
    if state == IterationState::Root {
        return Ok(name);
    }

    let padding = vertical_padding(depth, config.x_spacing, levels)?;
    let mut line = String::new();
    if !at_start {
        for _ in 0..config.y_spacing {
            line.push_str(&padding);
            line.push_str(VERTICAL);
            line.push('\n');
        }
    }
    line.push_str(&padding);
    line.push_str(connector_glyph(state));
    line.push_str(&horizontal_bar(config.x_spacing));
    line.push_str(&name);
    Ok(line)
}

/// Sanitize control characters to avoid terminal control-sequence injection.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}
