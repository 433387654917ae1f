//! dnslatency - DNS response time tester
//!
//! Binary entry point for the dnslatency CLI application.

#![warn(clippy::all, warnings)]
#![warn(clippy::pedantic, clippy::nursery)]

use clap::Parser;
use dnslatency::cli::{Cli, OutputFormat};
use dnslatency::config::{ConfigLoader, RunConfig};
use dnslatency::dns::{Dispatcher, ResolverClient};
use dnslatency::error::Result;
use dnslatency::report::{self, Report, RunInfo};
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Set up logging based on verbosity level.
///
/// Logs go to stderr so the report on stdout stays machine-readable.
fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    } else if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

/// Resolve settings, run every domain and print the report.
async fn run(cli: Cli) -> Result<()> {
    let file_settings = ConfigLoader::load_settings(cli.config.as_deref())?;
    let config = RunConfig::resolve(&cli, file_settings)?;
    let info = RunInfo::new(&config.settings, config.workers, config.domains.len());

    if config.format == OutputFormat::Table {
        print!("{}", report::render_header(&info));
        std::io::stdout().flush()?;
    }

    tracing::info!(
        "Testing {} domains against {} ({} queries each, {} workers)",
        config.domains.len(),
        config.settings.nameserver,
        config.settings.query_count,
        config.workers
    );

    let started = Instant::now();
    let dispatcher = Dispatcher::new(Arc::new(ResolverClient::new()), config.workers);
    let results = dispatcher.run(&config.domains, &config.settings).await;

    let excluded = config.domains.len() - results.len();
    if excluded > 0 {
        tracing::info!("{excluded} domains returned no successful response and are not listed");
    }
    tracing::info!("Finished in {:.2?}", started.elapsed());

    let report = Report::build(results)?;
    print!("{}", report::render(&report, &info, config.format)?);
    std::io::stdout().flush()?;

    Ok(())
}

/// Main entry point for the dnslatency CLI application.
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
