use std::io::{self, Write};

use clap::Parser;

use carrental::cli::{Args, Command};
use carrental::config::Config;
use carrental::error::Result;
use carrental::output;
use carrental::store::VehicleStore;

/// Set up SIGPIPE handling for Unix systems
/// This prevents "broken pipe" errors when `list` is piped to commands like `head`
#[cfg(unix)]
fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn setup_sigpipe() {
    // Windows doesn't have SIGPIPE
}

fn main() {
    setup_sigpipe();

    let args = Args::parse();
    let config = Config::from_args(&args);

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&config, args.command) {
        eprintln!("carrental: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config, command: Command) -> Result<()> {
    let mut store = VehicleStore::open(config.db_path.clone(), config.capacity)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Add { make, model, year, rate } => {
            let car = store.add(&make, &model, year, rate)?;
            writeln!(out, "Car added successfully with ID {}.", car.id)?;
        }
        Command::List => output::write_table(&mut out, store.list())?,
        Command::Show { id } => output::write_record(&mut out, store.get(id)?)?,
        Command::Rent { id, days, name, renter_id } => {
            let total_cost = store.rent(id, days, &name, &renter_id)?;
            output::write_receipt(&mut out, days, total_cost)?;
        }
        Command::Return { id } => {
            store.return_car(id)?;
            writeln!(out, "Car returned successfully!")?;
        }
        Command::Delete { id } => {
            store.delete(id)?;
            writeln!(out, "Car deleted successfully!")?;
        }
    }

    out.flush()?;
    Ok(())
}
