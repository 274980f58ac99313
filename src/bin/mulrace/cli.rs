use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mulrace")]
#[command(author, version, about = "Race Karatsuba against divide-and-conquer multiplication")]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, env = "MULRACE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Multiply two numbers with both algorithms
    Compare {
        x: String,
        y: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Multiply two numbers with one algorithm
    Multiply {
        /// karatsuba or divide_and_conquer
        algorithm: String,
        x: String,
        y: String,
    },

    /// Compare both algorithms on random operands of each digit length
    Sweep {
        /// Digit lengths (e.g., 10,50,100)
        #[arg(long, value_delimiter = ',')]
        digits: Option<Vec<usize>>,

        /// Seed for reproducible operands
        #[arg(long)]
        seed: Option<u64>,

        /// Chart to draw (e.g., recursive_calls, combined)
        #[arg(long)]
        chart: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prompt for two numbers, then browse charts from a menu
    #[command(alias = "i")]
    Interactive,

    /// Start the HTTP server
    #[cfg(feature = "server")]
    Serve {
        /// Host address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
}
