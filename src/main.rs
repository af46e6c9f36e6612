use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use trivia_reader::config::{DEFAULT_HOST, DEFAULT_PORT, ServeConfig, SourceConfig};
use trivia_reader::{DEFAULT_QUESTIONS_PATH, Trivia};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show errors
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play the trivia game in the terminal
    Play {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Serve the trivia API over HTTP
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Address to bind
        #[arg(long, env = "TRIVIA_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "TRIVIA_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// JSON file to load the questions from
    #[arg(short, long, env = "TRIVIA_QUESTIONS", default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Refuse question files with out-of-range answers or duplicate ids
    #[arg(long)]
    strict: bool,
}

impl From<SourceArgs> for SourceConfig {
    fn from(args: SourceArgs) -> Self {
        Self {
            questions: args.questions,
            strict: args.strict,
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { source } => {
            init_tracing(cli.quiet, cli.verbose, "warn")?;
            let source = SourceConfig::from(source);
            let trivia = Trivia::from_store(&source.store())?;
            trivia.play()?;
        }
        Command::Serve { source, host, port } => {
            init_tracing(cli.quiet, cli.verbose, "info")?;
            let config = ServeConfig {
                host,
                port,
                source: source.into(),
            };
            let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
            runtime.block_on(trivia_reader::server::run(config))?;
        }
    }

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool, default_level: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        default_level
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TRIVIA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
