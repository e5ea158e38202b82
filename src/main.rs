//! substitute's main application entry point.
//! Parses arguments, loads the substitution file and renders every entry.

use substitute::{
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::Processor,
    renderer::PlaceholderRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads the substitution file
/// 2. Renders each project's entries into the output directory
/// 3. Reports completion
fn run(args: Args) -> Result<()> {
    let config = load_config(&args.substitution_file)?;

    let renderer = PlaceholderRenderer::new();
    let processor =
        Processor::new(&renderer, &args.template_dir, &args.output_dir, &args.suffix);
    let results = processor.process(&config)?;

    println!(
        "Template substitution completed successfully ({} file(s) written).",
        results.len()
    );
    Ok(())
}
