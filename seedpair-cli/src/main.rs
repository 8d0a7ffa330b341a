use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod commands;
mod input;

#[derive(Parser)]
#[command(name = "seedpair")]
#[command(about = "Seedpair - exact k-mer seeding and adjacency pairing")]
#[command(version)]
#[command(long_about = "
Seedpair finds exact fixed-length window matches between database and query
sequences and groups matches that are close together in both coordinate
spaces into adjacent pairs.

Examples:
  seedpair split -i ACGTACGTACGT -l 5
  seedpair find --db genome.fa --query reads.fa -l 8
  seedpair pairs --db 'db1=ACGTTTAA' --query 'q1=TTAACGTA' -l 4 --json
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Number of threads to use
    #[arg(short, long, global = true)]
    pub threads: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a sequence into its overlapping fixed-length windows
    Split {
        /// Input sequence
        #[arg(short = 'i', long)]
        sequence: String,

        /// Window length
        #[arg(short, long)]
        length: usize,

        /// Emit JSON instead of the staggered listing
        #[arg(long)]
        json: bool,
    },

    /// Find exact window matches between database and query sequences
    Find {
        /// Database sequences (FASTA/FASTQ path or name=SEQUENCE)
        #[arg(long = "db", required = true)]
        databases: Vec<String>,

        /// Query sequences (FASTA/FASTQ path or name=SEQUENCE)
        #[arg(long = "query", required = true)]
        queries: Vec<String>,

        /// Window length
        #[arg(short, long)]
        length: usize,

        /// Emit JSON instead of the text listing
        #[arg(long)]
        json: bool,
    },

    /// Find matches and group them into adjacent pairs
    Pairs {
        /// Database sequences (FASTA/FASTQ path or name=SEQUENCE)
        #[arg(long = "db", required = true)]
        databases: Vec<String>,

        /// Query sequences (FASTA/FASTQ path or name=SEQUENCE)
        #[arg(long = "query", required = true)]
        queries: Vec<String>,

        /// Window length
        #[arg(short, long)]
        length: usize,

        /// Proximity bound for both axes (defaults to each query's length)
        #[arg(short, long)]
        bound: Option<i64>,

        /// Drop groups that produced no pairs
        #[arg(long)]
        skip_empty: bool,

        /// Emit JSON instead of the text listing
        #[arg(long)]
        json: bool,
    },
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        std::env::set_var("RUST_LOG", "error");
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        std::env::set_var("RUST_LOG", level);
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let threads = cli.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("Failed to set thread count")?;
    log::debug!("using {} thread(s)", threads);

    match cli.command {
        Commands::Split {
            sequence,
            length,
            json,
        } => commands::split::execute(&sequence, length, json),

        Commands::Find {
            databases,
            queries,
            length,
            json,
        } => commands::find::execute(&databases, &queries, length, json),

        Commands::Pairs {
            databases,
            queries,
            length,
            bound,
            skip_empty,
            json,
        } => commands::pairs::execute(&databases, &queries, length, bound, skip_empty, json),
    }
}
