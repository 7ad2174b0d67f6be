use clap::Args;
use std::path::PathBuf;

/// Arguments for indexing Base64 text
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Value written for each '=' pad
    #[arg(long, value_name = "N")]
    pub pad_with: Option<u8>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for splitting indexed text into class ranges
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Character class whose symbols mark split regions
    #[arg(short = 's', long, value_name = "CLASS")]
    pub split_on: Option<String>,

    /// Maximum number of split regions (0 = unlimited)
    #[arg(short = 'm', long, value_name = "N")]
    pub max_splits: Option<u32>,

    /// Show the probability of each range occurring in random input
    #[arg(short = 'p', long)]
    pub probability: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for listing character classes
#[derive(Args, Debug)]
pub struct ClassesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for pair-encoding indexed text
#[derive(Args, Debug)]
pub struct PairsArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Symbol offset at which pairing starts
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
