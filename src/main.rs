//! Scaffoldext's main application entry point and orchestration logic.
//! Parses command-line arguments, assembles the activation pipeline and
//! writes the resulting project tree to disk.

use std::path::PathBuf;

use scaffoldext::{
    actions::{default_actions, invoke, Extension},
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    extension::CustomExtension,
    logger::init_logger,
    options::Options,
    structure::{write_tree, Structure},
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
/// 1. Builds the generation options from the parsed arguments
/// 2. Lets the extension insert its steps into the host-baseline pipeline
/// 3. Invokes the pipeline, threading the tree/options pair through
/// 4. Writes the tree below the output directory (or logs it for --pretend)
fn run(args: Args) -> Result<()> {
    let mut opts = Options::new(args.project);
    opts.package = args.package.unwrap_or_default();
    opts.namespace = args
        .namespace
        .map(|ns| ns.split('.').map(str::to_string).collect())
        .unwrap_or_default();
    opts.force = args.force;
    opts.pretend = args.pretend;

    let extension = CustomExtension;
    let actions = extension.activate(default_actions())?;

    let (struct_, opts) = invoke(&actions, Structure::new(), opts)?;

    // The generated tree is rooted at the project name; --output-dir moves
    // that root elsewhere.
    let output_root = args.output_dir.unwrap_or_else(|| PathBuf::from("."));
    write_tree(&struct_, &output_root, &opts, opts.pretend)?;

    if !opts.pretend {
        println!("Extension project generated successfully in {}.", output_root.join(&opts.project).display());
    }
    Ok(())
}
