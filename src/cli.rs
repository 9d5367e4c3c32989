//! Command-line interface implementation for scaffoldext.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for scaffoldext.
#[derive(Parser, Debug)]
#[command(author, version, about = "scaffoldext: generate projects pre-wired as scaffolding-tool extensions", long_about = None)]
pub struct Args {
    /// Name of the extension project to generate
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Package name (defaults to the project name without prefix)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Namespace for the package; extensions only accept the reserved one
    #[arg(long)]
    pub namespace: Option<String>,

    /// Directory the project is generated into (defaults to the project name
    /// under the current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Keep a project name that does not follow the extension naming
    /// convention instead of rejecting it
    #[arg(short, long)]
    pub force: bool,

    /// Report what would be generated without writing anything
    #[arg(long)]
    pub pretend: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
