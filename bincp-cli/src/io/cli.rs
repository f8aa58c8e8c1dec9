use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON file containing one or more instances
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Index of the instance to solve within the input file
    #[arg(short = 'n', long, value_name = "INDEX")]
    pub instance: usize,
    /// Maximum number of bins, overrides the config. 0 uses twice the trivial lower bound
    #[arg(short, long, value_name = "N")]
    pub max_bins: Option<usize>,
    /// Solver parameters merged on top of the config, e.g. "max_time_in_seconds:10"
    #[arg(short, long, value_name = "PARAMS")]
    pub params: Option<String>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Folder to write the solution (JSON and SVG) to. Nothing is written if not specified
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
