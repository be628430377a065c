use std::path::PathBuf;

use crate::cli::Args;

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    pub db_path: PathBuf,
    pub capacity: Option<usize>,
    pub log_level: log::LevelFilter,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Config {
            db_path: args.db.clone(),
            capacity: args.capacity,
            log_level: args.log_level(),
        }
    }
}
