//! bgpview - print the BGP prefixes and origin ASNs of domains and IPs.
//!
//! This is the command-line interface for the bgpview library.

use anyhow::Result;
use bgpview::{load_targets, DisplayMode, LookupConfig, Orchestrator};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Get the version string for bgpview
fn get_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(env!("CARGO_PKG_VERSION"), "-UNRELEASED")
    } else {
        env!("CARGO_PKG_VERSION")
    }
}

/// Command-line arguments for the lookup tool.
#[derive(Parser, Debug)]
#[clap(
    name = "bgpview",
    version = get_version(),
    about = "Look up BGP prefixes and origin ASNs for domains or IPs using the BGPView API",
    long_about = None
)]
struct Args {
    /// Single target (domain or IP) to check
    #[clap(short, long)]
    url: Option<String>,

    /// File with one target per line
    #[clap(short, long)]
    list: Option<PathBuf>,

    /// Only print the ASNs of the target
    #[clap(short, long)]
    asn: bool,

    /// Only print the prefixes of the target
    #[clap(short, long)]
    prefix: bool,

    /// Enable diagnostic output on stderr (use -vv for trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Build the run configuration from the parsed arguments
    fn to_config(&self) -> Result<LookupConfig> {
        let mut builder = LookupConfig::builder()
            .display_mode(DisplayMode::from_flags(self.asn, self.prefix))
            .verbose(self.verbose);

        if let Some(url) = &self.url {
            builder = builder.target(url);
        }
        if let Some(list) = &self.list {
            builder = builder.list_path(list);
        }

        builder.build().map_err(anyhow::Error::msg)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    // Targets are processed one at a time, a single thread is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    if let Err(e) = runtime.block_on(async_main(args)) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn async_main(args: Args) -> Result<()> {
    let config = args.to_config()?;
    let targets = load_targets(&config)?;
    if targets.is_empty() {
        tracing::debug!("no targets given");
        return Ok(());
    }

    let orchestrator = Orchestrator::from_config(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = match orchestrator.run(targets.as_slice(), &mut out).await {
        Ok(()) => out.flush(),
        Err(e) => Err(e),
    };
    ignore_closed_output(written)?;

    Ok(())
}

/// A reader that went away (`bgpview ... | head`) ends output normally
fn ignore_closed_output(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed, stopping");
            Ok(())
        }
        other => other,
    }
}
