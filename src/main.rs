#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use lstree::cli::Args;
use lstree::{logging, printer};
use tracing::info;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args.validated(),
        // --help and --version land here too; only real usage errors go to stderr.
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    if let Err(e) = run_app(&args) {
        eprintln!("lstree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app(args: &Args) -> Result<()> {
    logging::init_tracing(args.verbose, args.quiet);

    let config = args.render_config();
    info!(
        path = %args.path.display(),
        x_spacing = config.x_spacing,
        y_spacing = config.y_spacing,
        sort = config.sort,
        ignored = config.ignore.len(),
        "listing"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let counts = printer::render_tree(&mut out, &args.path, &config)
        .context("listing failed")?;

    info!(
        directories = counts.directories,
        files = counts.files,
        total = counts.total(),
        "done"
    );
    Ok(())
}
