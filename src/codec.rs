//! Pipe-delimited line format for vehicle records
//!
//! One record per line, fields in fixed order:
//! `id|make|model|year|dailyRate|availableFlag|rentedDays|totalCost|renterName|renterId`

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use bstr::ByteSlice;

use crate::record::VehicleRecord;

const FIELD_COUNT: usize = 10;
const RECORD_DELIMITER: u8 = b'\n';

/// Records recovered from a backing file
#[derive(Debug, Default)]
pub struct Decoded {
    pub records: Vec<VehicleRecord>,
    /// Non-blank lines that failed to parse or repeated an earlier id
    pub skipped: usize,
}

/// Reads raw lines, stripping the line terminator
pub struct LineReader<R> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }

    /// Read the next line, returning None at EOF
    pub fn read_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_until(RECORD_DELIMITER, &mut self.buffer)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        if self.buffer.last() == Some(&RECORD_DELIMITER) {
            self.buffer.pop();
        }
        if self.buffer.last() == Some(&b'\r') {
            self.buffer.pop();
        }

        Ok(Some(&self.buffer))
    }
}

/// Format one record as a line, without the terminator
pub fn encode_record(car: &VehicleRecord) -> String {
    format!(
        "{}|{}|{}|{}|{:.2}|{}|{}|{:.2}|{}|{}",
        car.id,
        car.make,
        car.model,
        car.year,
        car.daily_rate,
        u8::from(car.available),
        car.rented_days,
        car.total_cost,
        car.renter_name,
        car.renter_id,
    )
}

/// Parse one line into a record
///
/// Returns None unless all ten fields are present and type-correct, and
/// the rental fields agree with the availability flag.
pub fn decode_record(line: &[u8]) -> Option<VehicleRecord> {
    let line = line.to_str().ok()?;
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != FIELD_COUNT {
        return None;
    }

    let id: u32 = fields[0].trim().parse().ok()?;
    if id == 0 {
        return None;
    }

    let available = match fields[5].trim() {
        "1" => true,
        "0" => false,
        _ => return None,
    };

    let car = VehicleRecord {
        id,
        make: fields[1].to_string(),
        model: fields[2].to_string(),
        year: fields[3].trim().parse().ok()?,
        daily_rate: parse_amount(fields[4])?,
        available,
        rented_days: fields[6].trim().parse().ok()?,
        total_cost: parse_amount(fields[7])?,
        renter_name: fields[8].to_string(),
        renter_id: fields[9].to_string(),
    };
    is_consistent(&car).then_some(car)
}

fn is_consistent(car: &VehicleRecord) -> bool {
    if car.make.trim().is_empty() || car.model.trim().is_empty() {
        return false;
    }
    if car.available {
        car.rented_days == 0 && car.total_cost == 0.0 && car.renter_name.is_empty() && car.renter_id.is_empty()
    } else {
        car.rented_days > 0 && !car.renter_name.is_empty() && !car.renter_id.is_empty()
    }
}

fn parse_amount(field: &str) -> Option<f64> {
    let amount: f64 = field.trim().parse().ok()?;
    (amount.is_finite() && amount >= 0.0).then_some(amount)
}

/// Decode every line of a reader, skipping malformed ones
pub fn read_records<R: BufRead>(reader: R) -> io::Result<Decoded> {
    let mut decoded = Decoded::default();
    let mut lines = LineReader::new(reader);
    let mut seen = HashSet::new();

    while let Some(line) = lines.read_line()? {
        if line.trim().is_empty() {
            continue;
        }
        match decode_record(line) {
            Some(car) if seen.insert(car.id) => decoded.records.push(car),
            _ => decoded.skipped += 1,
        }
    }

    Ok(decoded)
}

/// Encode every record in order, one line each
pub fn write_records<W: Write>(writer: W, records: &[VehicleRecord]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for car in records {
        writer.write_all(encode_record(car).as_bytes())?;
        writer.write_all(&[RECORD_DELIMITER])?;
    }
    writer.flush()
}

/// Load a backing file; a missing file decodes as empty
pub fn load_file(path: &Path) -> io::Result<Decoded> {
    match File::open(path) {
        Ok(file) => read_records(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Decoded::default()),
        Err(e) => Err(e),
    }
}

/// Truncate the backing file and write the full collection
pub fn save_file(path: &Path, records: &[VehicleRecord]) -> io::Result<()> {
    let file = File::create(path)?;
    write_records(file, records)
}
