//! template-build: copies `src` to `tmp` and turns component templates into modules.

use camino::Utf8PathBuf;
use clap::Parser;
use miette::{Diagnostic, IntoDiagnostic, Result};
use template_build::cli::Args;
use template_build::{logging, orchestrator, BuildConfig};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    let invocation_dir = std::env::current_dir().into_diagnostic()?;
    let invocation_dir = Utf8PathBuf::try_from(invocation_dir).into_diagnostic()?;

    let result = BuildConfig::resolve(
        args.root.as_deref(),
        &invocation_dir,
        args.mode,
        args.style_deletion,
    )
    .and_then(|config| orchestrator::run(&config));

    match result {
        Ok(summary) => {
            println!("{}", summary.format(args.output));
            if args.fail_on_file_errors && summary.failure_count() > 0 {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(help) = e.help() {
                eprintln!("help: {}", help);
            }
            std::process::exit(1);
        }
    }
}
