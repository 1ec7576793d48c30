//! Command implementations

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use super::Args;
use crate::config::{self, cli::CliConfig, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use crate::models::config::Settings;

/// Where the paths for a run come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Walk each directory in argument order, one report per directory
    Directories(Vec<PathBuf>),
    /// Read paths from standard input, one report
    Stdin,
    /// Read paths from each listing file, one report per file
    Listings(Vec<PathBuf>),
}

impl InputSource {
    /// Decide the input source for a run
    ///
    /// Stdin is used when forced, or when no paths were given and stdin is
    /// not a terminal. Otherwise an empty path list walks the current
    /// directory, even in listing mode.
    pub fn resolve(
        paths: Vec<PathBuf>,
        read_stdin: bool,
        listing: bool,
        stdin_is_terminal: bool,
    ) -> Self {
        if read_stdin || (paths.is_empty() && !stdin_is_terminal) {
            return InputSource::Stdin;
        }

        if paths.is_empty() {
            return InputSource::Directories(vec![PathBuf::from(".")]);
        }

        if listing {
            InputSource::Listings(paths)
        } else {
            InputSource::Directories(paths)
        }
    }
}

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Count files from the resolved input source
    Count {
        settings: Settings,
        input: InputSource,
    },
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    ///
    /// Settings are loaded from every configuration layer here, so config
    /// errors surface before any counting starts.
    pub fn from_args(args: Args) -> Result<Self> {
        if args.init {
            return Ok(Command::Init);
        }

        let cli_config = CliConfig::from_args(&args);
        let settings = config::load_config(&cli_config)?;
        let input = InputSource::resolve(
            args.paths,
            settings.read_stdin,
            args.listing,
            std::io::stdin().is_terminal(),
        );

        Ok(Command::Count { settings, input })
    }
}

/// Write a default configuration file into `dir`
///
/// Returns the created path, or `None` when a file already exists there.
pub fn init_config(dir: &Path) -> Result<Option<PathBuf>> {
    let config_path = dir.join(DEFAULT_CONFIG_FILE);

    if config_path.exists() {
        return Ok(None);
    }

    config::create_default_config(&config_path)?;
    Ok(Some(config_path))
}
