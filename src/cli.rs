//! Command-line interface implementation for substitute.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::constants::DEFAULT_TEMPLATE_SUFFIX;

/// Command-line arguments structure for substitute.
#[derive(Parser, Debug)]
#[command(author, version, about = "substitute: fill {{ key }} placeholders across template trees", long_about = None)]
pub struct Args {
    /// Directory containing template files
    #[arg(short = 't', long, value_name = "TEMPLATE_DIR")]
    pub template_dir: PathBuf,

    /// Directory where generated files are written, one subdirectory per project
    #[arg(short = 'o', long, value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// YAML file mapping projects to templates and their substitutions
    #[arg(short = 's', long, value_name = "SUBSTITUTION_FILE")]
    pub substitution_file: PathBuf,

    /// Suffix removed from template names to form output names
    #[arg(long, value_name = "SUFFIX", default_value = DEFAULT_TEMPLATE_SUFFIX)]
    pub suffix: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
