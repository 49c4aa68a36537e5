//! `renc` CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ren_drv::{run, Config, EmitKind};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Lex a Ren source file and print the result.
#[derive(Parser, Debug)]
#[command(name = "renc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexes a .ren file and prints its tokens or module metadata")]
struct Cli {
    /// The .ren file to lex.
    input: PathBuf,

    /// What to print: the token stream, or the module-metadata record.
    #[arg(long, value_enum, default_value = "tokens")]
    emit: EmitKind,

    /// Enable debug-level logging.
    #[arg(short, long, global = true, env = "RENC_VERBOSE")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config {
        input: cli.input,
        emit: cli.emit,
    };

    match run(&config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", anyhow::Error::new(err));
            ExitCode::FAILURE
        }
    }
}
