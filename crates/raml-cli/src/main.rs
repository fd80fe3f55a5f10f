use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;

#[derive(Parser)]
#[command(name = "raml", about = "Dictionary codec for repetitive scripts", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress log output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to a JSON codec config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Token delimiter: one ASCII char, \n, \t, \r, \s, \0 or 0xNN
    #[arg(long, short = 'd', global = true, value_parser = parse_delimiter)]
    delimiter: Option<u8>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a text file into a container
    Encode {
        input: PathBuf,

        /// Output path (defaults to INPUT.raml)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode a container back to text
    Decode {
        input: PathBuf,

        /// Output path (defaults to stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show header and dictionary facts of a container
    Info {
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Number of dictionary words to list (text and JSON)
        #[arg(long, default_value = "10")]
        words: usize,
    },
}

fn parse_delimiter(arg: &str) -> std::result::Result<u8, String> {
    raml_cli::parse_delimiter(arg).map_err(|e| e.to_string())
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli) {
        warn!(error = %format!("{e:#}"), "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = raml_cli::load_config(cli.config.as_deref(), cli.delimiter)?;

    match cli.command {
        Commands::Encode { input, output, json } => {
            let output = output.unwrap_or_else(|| raml_cli::default_output(&input));
            let summary = raml_cli::encode_file(&input, &output, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", raml_cli::format_summary(&summary));
            }
        }
        Commands::Decode { input, output } => {
            let text = raml_cli::decode_file(&input, output.as_deref())?;
            if output.is_none() {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&text)?;
                stdout.flush()?;
            }
        }
        Commands::Info { input, json, words } => {
            let info = raml_cli::inspect_file(&input)?;
            if json {
                println!("{}", raml_cli::format_info_json(&info, words)?);
            } else {
                print!("{}", raml_cli::format_info(&info, words));
            }
        }
    }
    Ok(())
}
