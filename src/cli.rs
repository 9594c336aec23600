use clap::Parser;
use std::path::PathBuf;

use crate::render::RenderConfig;

/// Largest accepted value for either spacing flag.
pub const MAX_SPACING: u64 = 256;

fn spacing_parser() -> clap::builder::RangedU64ValueParser<usize> {
    clap::builder::RangedU64ValueParser::<usize>::new().range(0..=MAX_SPACING)
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "lstree",
    version,
    about = "List a directory as a tree",
    after_help = "Examples:\n  lstree\n  lstree src -x 2 -y 0\n  lstree . --sort false -i target .git"
)]
pub struct Args {
    /// Directory (or file) to list
    #[arg(value_name = "DIRECTORY_PATH", default_value = ".")]
    pub path: PathBuf,

    /// Horizontal spacing (number of spaces per level)
    #[arg(short = 'x', long = "x_spacing", default_value_t = 3, value_parser = spacing_parser())]
    pub x_spacing: usize,

    /// Vertical spacing (number of connector lines between entries)
    #[arg(short = 'y', long = "y_spacing", default_value_t = 1, value_parser = spacing_parser())]
    pub y_spacing: usize,

    /// Sort entries by name
    #[arg(short = 's', long = "sort", default_value_t = true, action = clap::ArgAction::Set)]
    pub sort: bool,

    /// Names to leave out, matched exactly (repeatable)
    #[arg(short = 'i', long = "ignore", num_args = 1.., action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// The immutable settings handed to the printer.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            x_spacing: self.x_spacing,
            y_spacing: self.y_spacing,
            sort: self.sort,
            ignore: self.ignore.iter().cloned().collect(),
        }
    }
}
