mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use vec64::{SymbolError, UnknownClassError, should_use_color};

use args::{ClassesArgs, IndexArgs, PairsArgs, SplitArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "vec64")]
#[command(version)]
#[command(about = "Index Base64 text into symbol values and split it into character-class ranges", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map Base64 characters to symbol values (0-63, 64 for '=')
    Index(IndexArgs),

    /// Split indexed input into ranges of shared character class
    Split(SplitArgs),

    /// List the named character classes
    Classes(ClassesArgs),

    /// Pack adjacent symbol values into 12-bit pair codes
    Pairs(PairsArgs),
}

/// Parse arguments, run the chosen subcommand, and report any error on stderr.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    match execute(cli.command, &cli.global) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let color = !cli.global.no_color && should_use_color();
            eprintln!("{}", report(e.as_ref(), color));
            ExitCode::FAILURE
        }
    }
}

fn execute(command: Commands, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = config::load_settings(global)?;

    match command {
        Commands::Index(args) => handlers::index::handle(args, global, &settings),
        Commands::Split(args) => handlers::split::handle(args, global, &settings),
        Commands::Classes(args) => handlers::classes::handle(args, global, &settings),
        Commands::Pairs(args) => handlers::pairs::handle(args, global, &settings),
    }
}

/// Render an error for the terminal, styling the crate's own error types when `color` is set.
fn report(err: &(dyn std::error::Error + 'static), color: bool) -> String {
    if let Some(e) = err.downcast_ref::<SymbolError>() {
        return e.render(color);
    }
    if let Some(e) = err.downcast_ref::<UnknownClassError>() {
        return e.render(color);
    }
    err.to_string()
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(global: &GlobalArgs) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match (global.quiet, global.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "debug",
            (false, _) => "trace",
        };
        EnvFilter::new(format!("vec64={level}"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!global.no_color)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_without_color() {
        let err: Box<dyn std::error::Error> =
            Box::new(UnknownClassError::new("PUNKT", Some("PUNCT".to_string())));
        let text = report(err.as_ref(), false);

        assert!(text.starts_with("error: character class 'PUNKT' not found"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_report_with_color() {
        let err: Box<dyn std::error::Error> = Box::new(SymbolError::invalid_symbol(99, 2));
        assert!(report(err.as_ref(), true).starts_with("\x1b[1;31merror:"));
    }

    #[test]
    fn test_report_other_errors() {
        let err: Box<dyn std::error::Error> = "Input size (5 bytes) exceeds maximum (4 bytes)".into();
        assert_eq!(report(err.as_ref(), true), "Input size (5 bytes) exceeds maximum (4 bytes)");
    }
}
