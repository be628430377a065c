use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "carrental", about = "Manage a rental car inventory")]
pub struct Args {
    /// Database file holding the inventory
    #[arg(long, value_name = "FILE", env = "CARRENTAL_DB", default_value = "carsdb.txt")]
    pub db: PathBuf,

    /// Refuse to add cars beyond N records
    #[arg(long, value_name = "N")]
    pub capacity: Option<usize>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a new car
    Add {
        #[arg(long)]
        make: String,

        #[arg(long)]
        model: String,

        /// Year of manufacture
        #[arg(long, allow_hyphen_values = true)]
        year: i32,

        /// Daily rental rate
        #[arg(long)]
        rate: f64,
    },

    /// Display all cars
    List,

    /// Display one car
    Show { id: u32 },

    /// Rent a car
    Rent {
        id: u32,

        /// Number of days to rent
        #[arg(long, allow_hyphen_values = true)]
        days: i64,

        /// Renter's name
        #[arg(long)]
        name: String,

        /// Renter's ID number
        #[arg(long = "renter-id")]
        renter_id: String,
    },

    /// Return a rented car
    Return { id: u32 },

    /// Delete a car
    Delete { id: u32 },
}

impl Args {
    /// Log filter implied by -v flags
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
