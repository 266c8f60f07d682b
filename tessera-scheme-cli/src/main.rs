use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod output;
mod scheme;

use scheme::SchemeArgs;

#[derive(Parser)]
#[command(name = "tessera-scheme")]
#[command(version, about = "Inspect and export Material dynamic color schemes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every color role of a scheme as a table
    Show {
        #[command(flatten)]
        scheme: SchemeArgs,
    },
    /// Print one resolved color role
    Role {
        /// Role name, e.g. `primary_container` or `on-surface`
        name: String,
        #[command(flatten)]
        scheme: SchemeArgs,
    },
    /// Export every color role as JSON or CSS custom properties
    Export {
        #[command(flatten)]
        scheme: SchemeArgs,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Css,
}

fn main() -> Result<()> {
    init_tracing();
    let Cli { command } = Cli::parse();

    match command {
        Commands::Show { scheme } => {
            commands::show::execute(&scheme)?;
        }
        Commands::Role { name, scheme } => {
            commands::role::execute(&name, &scheme)?;
        }
        Commands::Export {
            scheme,
            format,
            output,
        } => {
            commands::export::execute(&scheme, format, output.as_deref())?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("off,tessera_dynamic_color=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
