use std::process;

use countext::{
    cli::{Args, Command, init_config, run},
    error::{Result, ResultExt},
    output::create_writer,
};
use env_logger::{Builder, Env};

fn main() {
    // Parse command-line arguments; clap exits with status 2 on bad input
    let args = Args::parse_args();

    // Run the command and get exit code
    let exit_code = run_command(args);

    process::exit(exit_code);
}

/// Run the command with proper error handling
fn run_command(args: Args) -> i32 {
    match Command::from_args(args).and_then(execute_command) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}: {}", err.severity(), err.user_message());
            err.exit_code()
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    // A second init (tests, embedding) is harmless
    let _ = Builder::from_env(Env::default().default_filter_or(default_filter)).try_init();
}

/// Execute the command
fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Init => {
            init_logging(false);

            let created = init_config(std::path::Path::new("."))
                .with_context(|| "Failed to create configuration file")?;

            match created {
                Some(path) => {
                    println!("Created default configuration file at: {}", path.display());
                    println!("Every setting in it is commented out; uncomment the ones you want to change.");
                }
                None => {
                    println!("Configuration file already exists. To overwrite it, delete the file first.");
                }
            }

            Ok(())
        }
        Command::Count { settings, input } => {
            init_logging(settings.verbose);
            log::debug!("settings: {:?}", settings);

            let mut writer = create_writer(settings.output_file.as_deref())?;
            run(&settings, &input, writer.as_mut())?;

            Ok(())
        }
    }
}
