//! export-map CLI entry point

use std::fs;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use export_map::pipeline::resolve_root;
use export_map::{render, scan, Cli, RegexMatcher, ScanConfig};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Logs go to stderr so reports on stdout stay clean
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    // Fails only if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> export_map::Result<String> {
    let root = resolve_root(&cli.path)?;

    let mut config = ScanConfig::load(cli.config.as_deref(), &root)?;
    config.apply(&cli.overrides());
    tracing::debug!("Scan config: {:?}", config);

    let ctx = scan(&root, &config, &RegexMatcher)?;
    let report = render(&ctx, cli.format, &root)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &report)?;
            eprintln!("Wrote {} report to {}", format_name(cli), path.display());
            Ok(String::new())
        }
        None => Ok(report),
    }
}

fn format_name(cli: &Cli) -> String {
    format!("{:?}", cli.format).to_lowercase()
}
