//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for countext
///
/// Built once from defaults, config files, environment and command line,
/// then shared read-only with every component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory names, paths or glob patterns excluded from traversal
    pub ignore: Vec<String>,

    /// Drop files whose base name contains no '.' at all
    pub ignore_noext: bool,

    /// Verbose diagnostics instead of the progress indicator
    pub verbose: bool,

    /// Read candidate paths from standard input
    pub read_stdin: bool,

    /// Fold grouping keys to lowercase
    pub case_insensitive: bool,

    /// What part of the file name forms the grouping key
    pub mode: GroupBy,

    /// Sort entries by ascending count (otherwise first-seen order)
    pub sort: bool,

    /// Output format (text, json, csv)
    pub format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to follow symbolic links during directory traversal
    pub follow_links: bool,

    /// Maximum directory depth to traverse
    pub max_depth: Option<usize>,

    /// Whether to colour diagnostics on stderr
    pub use_colors: bool,

    /// Whether to show the progress spinner
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            ignore_noext: false,
            verbose: false,
            read_stdin: false,
            case_insensitive: false,
            mode: GroupBy::Extension,
            sort: true,
            format: OutputFormat::Text,
            output_file: None,
            follow_links: false,
            max_depth: None,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned plain-text table
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Which part of a file name is used as the grouping key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    /// Extension including the dot, or the whole name when there is none
    #[serde(alias = "ext")]
    Extension,
    /// Name without its final extension
    #[serde(alias = "name")]
    Stem,
    /// The whole base name
    #[serde(alias = "basename")]
    Filename,
}

impl std::str::FromStr for GroupBy {
    type Err = String;

    /// Only the first character matters, so `e`, `ext` and `extension` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('e') | Some('x') => Ok(GroupBy::Extension),
            Some('s') | Some('n') => Ok(GroupBy::Stem),
            Some('f') | Some('b') => Ok(GroupBy::Filename),
            _ => Err(format!("unknown mode '{}' (expected extension, stem or filename)", s)),
        }
    }
}

impl std::fmt::Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupBy::Extension => write!(f, "extension"),
            GroupBy::Stem => write!(f, "stem"),
            GroupBy::Filename => write!(f, "filename"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub ignore: Option<Vec<String>>,
    pub ignore_noext: Option<bool>,
    pub verbose: Option<bool>,
    pub read_stdin: Option<bool>,
    pub case_insensitive: Option<bool>,
    pub mode: Option<GroupBy>,
    pub sort: Option<bool>,
    pub format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub follow_links: Option<bool>,
    pub max_depth: Option<usize>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    ///
    /// Scalar fields from `other` take precedence. Ignore lists are unioned,
    /// keeping the first occurrence of each entry.
    pub fn merge_from(&mut self, other: PartialSettings) {
        if let Some(extra) = other.ignore {
            let list = self.ignore.get_or_insert_with(Vec::new);
            for entry in extra {
                if !list.contains(&entry) {
                    list.push(entry);
                }
            }
        }
        if other.ignore_noext.is_some() {
            self.ignore_noext = other.ignore_noext;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.read_stdin.is_some() {
            self.read_stdin = other.read_stdin;
        }
        if other.case_insensitive.is_some() {
            self.case_insensitive = other.case_insensitive;
        }
        if other.mode.is_some() {
            self.mode = other.mode;
        }
        if other.sort.is_some() {
            self.sort = other.sort;
        }
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(ignore) = &self.ignore {
            settings.ignore = ignore.clone();
        }
        if let Some(ignore_noext) = self.ignore_noext {
            settings.ignore_noext = ignore_noext;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(read_stdin) = self.read_stdin {
            settings.read_stdin = read_stdin;
        }
        if let Some(case_insensitive) = self.case_insensitive {
            settings.case_insensitive = case_insensitive;
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(sort) = self.sort {
            settings.sort = sort;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(follow_links) = self.follow_links {
            settings.follow_links = follow_links;
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_depth = Some(max_depth);
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }

        settings
    }
}
