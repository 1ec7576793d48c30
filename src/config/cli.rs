//! Command-line argument configuration source

use std::path::PathBuf;

use crate::cli::args::Args;
use crate::error::Result;
use crate::models::config::{GroupBy, OutputFormat, PartialSettings};
use super::ConfigSource;

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
}

/// The settings-related subset of the command line
///
/// Tri-state fields are `None` when the flag (and its `--no-` form) was absent,
/// so lower-priority sources keep their value.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub ignore: Vec<String>,
    pub verbose: Option<bool>,
    pub stdin: bool,
    pub case_insensitive: Option<bool>,
    pub ignore_noext: bool,
    pub mode: Option<GroupBy>,
    pub no_sort: bool,
    pub format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
    pub no_colors: bool,
    pub no_progress: bool,
    pub config: Option<PathBuf>,
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        let cli_args = CliArgs {
            ignore: args.ignore.clone(),
            verbose: Args::toggle(args.verbose, args.no_verbose),
            stdin: args.stdin,
            case_insensitive: Args::toggle(args.case_insensitive, args.no_case_insensitive),
            ignore_noext: args.ignore_noext,
            mode: args.mode,
            no_sort: args.no_sort,
            format: args.format,
            output_file: args.output_file.clone(),
            follow_links: args.follow_links,
            max_depth: args.max_depth,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            config: args.config.clone(),
        };

        Self::new(cli_args)
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings::default();

        if !self.args.ignore.is_empty() {
            settings.ignore = Some(self.args.ignore.clone());
        }

        settings.verbose = self.args.verbose;
        settings.case_insensitive = self.args.case_insensitive;
        settings.mode = self.args.mode;
        settings.format = self.args.format;
        settings.max_depth = self.args.max_depth;

        if let Some(output_file) = &self.args.output_file {
            settings.output_file = Some(output_file.clone());
        }

        // Boolean flags only ever switch their setting one way
        if self.args.stdin {
            settings.read_stdin = Some(true);
        }

        if self.args.ignore_noext {
            settings.ignore_noext = Some(true);
        }

        if self.args.no_sort {
            settings.sort = Some(false);
        }

        if self.args.follow_links {
            settings.follow_links = Some(true);
        }

        if self.args.no_colors {
            settings.use_colors = Some(false);
        }

        if self.args.no_progress {
            settings.show_progress = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        // CLI args are always available
        true
    }

    fn name(&self) -> &str {
        &self.name
    }
}
