use std::io::{self, BufWriter, Write};

use crate::record::VehicleRecord;

const RULE_WIDTH: usize = 125;

/// Write the inventory as a table
pub fn write_table<W: Write>(writer: W, records: &[VehicleRecord]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);

    if records.is_empty() {
        writeln!(writer, "No cars in the database.")?;
        return writer.flush();
    }

    writeln!(writer, "--- Car Inventory ---")?;
    writeln!(
        writer,
        "{:<5} {:<15} {:<15} {:<6} {:<12} {:<10} {:<12} {:<12} {:<15} {:<10}",
        "ID", "Make", "Model", "Year", "Daily Rate", "Status", "Days Rented", "Total Cost", "Renter Name", "Renter ID"
    )?;
    writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;

    for car in records {
        write_row(&mut writer, car)?;
    }

    writer.flush()
}

/// Write a single record as a one-row table
pub fn write_record<W: Write>(writer: W, car: &VehicleRecord) -> io::Result<()> {
    write_table(writer, std::slice::from_ref(car))
}

fn write_row<W: Write>(writer: &mut W, car: &VehicleRecord) -> io::Result<()> {
    writeln!(
        writer,
        "{:<5} {:<15} {:<15} {:<6} ${:<11.2} {:<10} {:<12} ${:<11.2} {:<15} {:<10}",
        car.id,
        car.make,
        car.model,
        car.year,
        car.daily_rate,
        car.status(),
        car.rented_days,
        car.total_cost,
        or_na(&car.renter_name),
        or_na(&car.renter_id),
    )
}

fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

/// Summary printed after a successful rental
pub fn write_receipt<W: Write>(mut writer: W, days: i64, total_cost: f64) -> io::Result<()> {
    writeln!(writer, "Car rented successfully!")?;
    writeln!(writer, "Total cost for {} days: ${:.2}", days, total_cost)
}
