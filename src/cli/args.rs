//! Command-line argument parsing

use crate::models::config::{GroupBy, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// countext - count files by extension
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "countext")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Count files under directories, grouped by file extension")]
#[command(long_about = "countext walks one or more directories (or reads a list of paths from standard input) \
and prints, for each source, how many files carry each extension. Dot-files are counted under their full name \
and files without an extension under their base name. Tables are sorted by ascending count.")]
#[command(after_help = "EXAMPLES:

    # Count the current directory
    countext

    # Count two trees, skipping build output and VCS metadata
    countext -itarget --ignore=.git src tests

    # Feed paths from another tool
    find . -type f -newer Cargo.toml | countext

    # Fold case and drop extension-less files
    countext -c -n ~/Pictures

    # Group by file stem instead of extension, unsorted
    countext --mode stem --no-sort

    # Read paths from listing files, write CSV to a file
    countext -f --format csv -o counts.csv files-a.txt files-b.txt
")]
pub struct Args {
    /// Directories to scan (listing files with --listing)
    #[arg(value_name = "DIRECTORY", help = "Directories to scan; defaults to '.' when none are given and stdin is a terminal")]
    pub paths: Vec<PathBuf>,

    /// Directories to skip during traversal
    #[arg(short = 'i', long = "ignore", value_name = "DIR", help = "Add DIR to the list of directories to be ignored (repeatable; exact base name or walked path, glob:PATTERN for a glob)")]
    pub ignore: Vec<String>,

    /// Verbose diagnostics
    #[arg(short, long, overrides_with = "no_verbose", help = "Print verbose diagnostics instead of the progress indicator")]
    pub verbose: bool,

    #[arg(long, overrides_with = "verbose", help = "Turn verbose diagnostics off")]
    pub no_verbose: bool,

    /// Read paths from standard input
    #[arg(long, help = "Read paths from stdin (e.g. the output of 'find')")]
    pub stdin: bool,

    /// Lowercase grouping keys
    #[arg(short = 'c', long, overrides_with = "no_case_insensitive", help = "Ignore case when grouping (keys are lowercased)")]
    pub case_insensitive: bool,

    #[arg(long, overrides_with = "case_insensitive", help = "Group case-sensitively")]
    pub no_case_insensitive: bool,

    /// Drop files without any dot in their name
    #[arg(short = 'n', long = "ignore-noext", help = "Ignore files without an extension")]
    pub ignore_noext: bool,

    /// Grouping mode
    #[arg(short = 'm', long, value_name = "MODE", help = "What to group by: extension (default), stem or filename")]
    pub mode: Option<GroupBy>,

    /// Keep first-seen order
    #[arg(long, help = "Do not sort entries by count")]
    pub no_sort: bool,

    /// Treat positional arguments as listing files
    #[arg(short = 'f', long, help = "Interpret arguments as files containing one path per line")]
    pub listing: bool,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT", help = "Output format: 'text' table, 'json' or 'csv'")]
    pub format: Option<OutputFormat>,

    /// Output file path
    #[arg(short = 'o', long = "output", value_name = "FILE", help = "Write results to FILE instead of stdout")]
    pub output_file: Option<PathBuf>,

    /// Follow symbolic links
    #[arg(long, help = "Follow symbolic links during directory traversal")]
    pub follow_links: bool,

    /// Maximum traversal depth
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse (the root is depth 0)")]
    pub max_depth: Option<usize>,

    /// Disable colours
    #[arg(long, help = "Disable coloured diagnostics")]
    pub no_colors: bool,

    /// Disable the spinner
    #[arg(long, help = "Disable the progress indicator")]
    pub no_progress: bool,

    /// Configuration file path
    #[arg(long, value_name = "FILE", help = "Path to configuration file (defaults to .countext.toml if present)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.countext.toml) in the current directory")]
    pub init: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// `Some(true)` / `Some(false)` when `--X` / `--no-X` was given last
    pub fn toggle(on: bool, off: bool) -> Option<bool> {
        match (on, off) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }
}
