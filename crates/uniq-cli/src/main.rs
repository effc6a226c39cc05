mod commands;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use uniq_core::UniqError;

#[derive(Parser)]
#[command(
    name = "uniq",
    version,
    about = "Collapse adjacent duplicate lines",
    override_usage = uniq_core::USAGE
)]
struct Cli {
    #[command(flatten)]
    flags: commands::Flags,

    /// TOML file with default options (falls back to $UNIQ_CONFIG)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    output: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("UNIQ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let result = commands::cmd_uniq(
        &cli.flags,
        cli.config.as_deref(),
        cli.input.as_deref(),
        cli.output.as_deref(),
    );

    if let Err(err) = result {
        let code = match err.downcast_ref::<UniqError>() {
            Some(UniqError::Usage { usage }) => {
                eprintln!("usage: {usage}");
                2
            }
            Some(e) => {
                eprintln!("uniq: {e}");
                e.exit_code()
            }
            None => {
                eprintln!("uniq: {err:#}");
                1
            }
        };
        std::process::exit(code);
    }
}
