mod generate;
mod report;
mod verify;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shopgen")]
#[command(version)]
#[command(
    about = "Generate a deterministic synthetic e-commerce CSV dataset",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the five CSV tables into an output directory
    Generate {
        /// Output directory for the CSV files
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Number of customers
        #[arg(long, default_value = "1000")]
        customers: usize,

        /// Number of products
        #[arg(long, default_value = "500")]
        products: usize,

        /// Number of orders
        #[arg(long, default_value = "2000")]
        orders: usize,

        /// Random seed; the same seed and counts produce byte-identical files
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Suppress per-table progress on stderr
        #[arg(short, long)]
        quiet: bool,
    },

    /// Check referential integrity and invariants of an emitted dataset
    Verify {
        /// Directory containing the five CSV files
        #[arg(default_value = "output")]
        dir: PathBuf,

        /// Emit the issue list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Top customer/product pairs by revenue (the bundled SQL, in-process)
    Report {
        /// Directory containing the five CSV files
        #[arg(default_value = "output")]
        dir: PathBuf,

        /// Number of pairs to show
        #[arg(short, long, default_value = "100")]
        limit: usize,

        /// Emit rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            output,
            customers,
            products,
            orders,
            seed,
            quiet,
        } => generate::run(output, customers, products, orders, seed, quiet),
        Commands::Verify { dir, json } => verify::run(dir, json),
        Commands::Report { dir, limit, json } => report::run(dir, limit, json),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "shopgen", &mut io::stdout());
            Ok(())
        }
    }
}
