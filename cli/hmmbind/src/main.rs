//! hmmbind CLI: inspect native status codes and render binding errors.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hmmbind", version, about = "Diagnostics for native Easel/HMMER bindings")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect the native status code table
    Status {
        #[command(subcommand)]
        action: StatusAction,
    },
    /// Render a binding error the way bindings report it
    Render {
        #[command(subcommand)]
        action: RenderAction,
    },
}

#[derive(Subcommand)]
enum StatusAction {
    /// List every known status code
    List {
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Describe a single status code
    Lookup {
        /// Raw status code
        #[arg(allow_negative_numbers = true)]
        code: i32,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
}

#[derive(Subcommand)]
enum RenderAction {
    /// Unexpected status returned by a native call
    Unexpected {
        /// Raw status code
        #[arg(long, allow_negative_numbers = true)]
        code: i32,
        /// Name of the failing native function
        #[arg(long)]
        function: String,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Failed allocation of a native structure
    Alloc {
        /// Native type name (e.g., P7_HMM)
        ctype: String,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Generic native library failure
    Easel {
        /// Diagnostic message
        message: String,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let output = match cli.command {
        Commands::Status { action } => match action {
            StatusAction::List { format } => commands::status::list(format.as_deref())?,
            StatusAction::Lookup { code, format } => {
                commands::status::lookup(code, format.as_deref())?
            }
        },

        Commands::Render { action } => {
            let (err, format) = match action {
                RenderAction::Unexpected {
                    code,
                    function,
                    format,
                } => (hmmbind_errors::BindingError::unexpected(code, function), format),
                RenderAction::Alloc { ctype, format } => {
                    (hmmbind_errors::BindingError::allocation(ctype), format)
                }
                RenderAction::Easel { message, format } => {
                    (hmmbind_errors::BindingError::easel(message), format)
                }
            };
            commands::render::render(&err, format.as_deref())?
        }
    };

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lookup_with_negative_code() {
        let cli = Cli::try_parse_from(["hmmbind", "status", "lookup", "-1"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Status {
                action: StatusAction::Lookup { code: -1, .. }
            }
        ));
    }

    #[test]
    fn parses_render_unexpected() {
        let cli = Cli::try_parse_from([
            "hmmbind",
            "-v",
            "render",
            "unexpected",
            "--code",
            "7",
            "--function",
            "p7_Pipeline",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(run(cli).is_ok());
    }

    #[test]
    fn run_rejects_unknown_format() {
        let cli = Cli::try_parse_from(["hmmbind", "status", "list", "--format", "xml"]).unwrap();
        assert!(run(cli).is_err());
    }
}
