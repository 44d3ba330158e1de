//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lalp-tei")]
#[command(about = "Convert coded letter transcriptions into TEI-XML", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $LALP_TEI_CONFIG, then ./lalp-tei.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert one coded letter to a TEI document
    Convert {
        /// Source file ('-' or omitted: stdin)
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert every source file under a directory
    Batch {
        /// Directory to search recursively
        dir: PathBuf,

        /// Write documents under this directory instead of next to sources
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Show the fields extracted from a coded letter
    Fields {
        /// Source file ('-' or omitted: stdin)
        input: Option<PathBuf>,

        /// List every recognised tag, including absent ones
        #[arg(short, long)]
        all: bool,

        /// Print only this tag's value
        #[arg(short, long, conflicts_with = "all")]
        tag: Option<String>,
    },

    /// Write a default lalp-tei.toml
    Init {
        /// Directory to write into (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}
