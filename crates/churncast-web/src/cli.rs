use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "churncast")]
#[command(
    author,
    version,
    about = "Customer churn prediction form and API"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the prediction server with the web form
    Serve {
        /// Listen port
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Listen address
        #[arg(short, long, default_value = "127.0.0.1")]
        address: String,

        /// Artifact config file (YAML); defaults to the vault/ artifacts
        #[arg(long)]
        artifacts: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Predict churn for a single record without the web form
    Predict {
        /// Record JSON file; reads stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Send the record to a running server instead of loading
        /// artifacts locally (e.g. http://127.0.0.1:3000)
        #[arg(short, long)]
        target: Option<String>,

        /// Artifact config file (YAML); defaults to the vault/ artifacts
        #[arg(long)]
        artifacts: Option<PathBuf>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}
