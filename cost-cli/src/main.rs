use clap::Parser;
use tracing_subscriber::EnvFilter;

use cost_cli::{Args, app};

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn` (or `debug` with `--verbose`) so the report on
///   stdout stays clean.
/// * Strips timestamps and target names and writes to stderr.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run(&args, &mut out).await
}
