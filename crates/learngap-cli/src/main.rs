//! learngap CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "learngap",
    version,
    about = "Learning-style scoring, risk screening, and accessible content conversion"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Score an assessment input JSON file
    Analyze {
        /// Assessment input JSON
        #[arg(long)]
        input: PathBuf,

        /// Student name shown in reports
        #[arg(long)]
        student: Option<String>,

        /// Output format: json, text, markdown, html
        #[arg(long, default_value = "text", value_parser = ["json", "text", "markdown", "html"])]
        format: String,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Convert text into an accessible format
    Convert {
        /// Target format: simplified, visual, dyslexia, audio
        #[arg(long)]
        format: String,

        /// Text to convert
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        text: Option<String>,

        /// Read the text from a file
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Print the questionnaires
    Questions {
        /// Only this audience: teacher, parent, student
        #[arg(long)]
        audience: Option<String>,
    },

    /// Render a saved JSON report
    Report {
        /// Report JSON written by `learngap analyze --format json`
        #[arg(long)]
        input: PathBuf,

        /// Output format: markdown, html
        #[arg(long, default_value = "markdown", value_parser = ["markdown", "html"])]
        format: String,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Create starter config and a sample input
    Init,
}

fn init_tracing() {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = "learngap=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { config, host, port } => commands::serve::execute(config, host, port).await,
        Commands::Analyze {
            input,
            student,
            format,
            output,
        } => commands::analyze::execute(input, student, format, output),
        Commands::Convert {
            format,
            text,
            input,
        } => commands::convert::execute(format, text, input),
        Commands::Questions { audience } => commands::questions::execute(audience),
        Commands::Report {
            input,
            format,
            output,
        } => commands::report::execute(input, format, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
