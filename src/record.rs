//! The vehicle record and the field rules every stored record obeys.

use crate::error::{RentalError, Result};

/// Longest accepted text field, in characters
pub const MAX_TEXT_LEN: usize = 49;

/// Separator between fields of a persisted line
pub const FIELD_DELIMITER: char = '|';

/// One vehicle's identity, description and rental state
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleRecord {
    pub id: u32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub daily_rate: f64,
    /// `true` when the car can be rented
    pub available: bool,
    pub rented_days: u32,
    pub total_cost: f64,
    pub renter_name: String,
    pub renter_id: String,
}

impl VehicleRecord {
    /// Build an available record with no renter
    pub fn new(id: u32, make: String, model: String, year: i32, daily_rate: f64) -> Self {
        Self {
            id,
            make,
            model,
            year,
            daily_rate,
            available: true,
            rented_days: 0,
            total_cost: 0.0,
            renter_name: String::new(),
            renter_id: String::new(),
        }
    }

    /// Human readable rental state
    pub fn status(&self) -> &'static str {
        if self.available { "Available" } else { "Rented" }
    }

    /// Mark the car rented, returning the computed total cost
    ///
    /// Leaves the record untouched when the cost cannot be represented.
    pub(crate) fn rent(&mut self, days: u32, renter_name: String, renter_id: String) -> Result<f64> {
        let total_cost = round_cents(f64::from(days) * self.daily_rate);
        if !total_cost.is_finite() {
            return Err(RentalError::InvalidDuration(i64::from(days)));
        }

        self.renter_name = renter_name;
        self.renter_id = renter_id;
        self.rented_days = days;
        self.total_cost = total_cost;
        self.available = false;
        Ok(total_cost)
    }

    /// Clear all rental fields
    pub(crate) fn release(&mut self) {
        self.available = true;
        self.rented_days = 0;
        self.total_cost = 0.0;
        self.renter_name.clear();
        self.renter_id.clear();
    }
}

/// Check a free-text field before it enters the store
///
/// The value is trimmed; it must be non-empty, at most [`MAX_TEXT_LEN`]
/// characters, and free of the field separator and control characters.
pub fn validate_text(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(RentalError::InvalidField {
            field,
            reason: "must not be empty".to_string(),
        });
    }

    if value.chars().count() > MAX_TEXT_LEN {
        return Err(RentalError::InvalidField {
            field,
            reason: format!("longer than {} characters", MAX_TEXT_LEN),
        });
    }

    if value.contains(FIELD_DELIMITER) || value.chars().any(char::is_control) {
        return Err(RentalError::InvalidField {
            field,
            reason: format!("must not contain '{}' or control characters", FIELD_DELIMITER),
        });
    }

    Ok(value.to_string())
}

/// Check a daily rate and round it to whole cents
pub fn validate_rate(rate: f64) -> Result<f64> {
    let rounded = round_cents(rate);
    if !rounded.is_finite() || rate < 0.0 {
        return Err(RentalError::InvalidField {
            field: "daily rate",
            reason: format!("{} is not a non-negative amount", rate),
        });
    }
    Ok(rounded)
}

/// Round a currency amount to two fractional digits
///
/// Values produced here survive a `{:.2}` format and re-parse unchanged.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corolla() -> VehicleRecord {
        VehicleRecord::new(1, "Toyota".into(), "Corolla".into(), 2020, 25.0)
    }

    #[test]
    fn test_new_record_is_available() {
        let car = corolla();
        assert!(car.available);
        assert_eq!(car.rented_days, 0);
        assert_eq!(car.total_cost, 0.0);
        assert!(car.renter_name.is_empty());
        assert!(car.renter_id.is_empty());
        assert_eq!(car.status(), "Available");
    }

    #[test]
    fn test_rent_then_release() {
        let mut car = corolla();
        let cost = car.rent(3, "Alice".into(), "ID123".into()).unwrap();
        assert_eq!(cost, 75.0);
        assert!(!car.available);
        assert_eq!(car.status(), "Rented");

        car.release();
        assert_eq!(car, corolla());
    }

    #[test]
    fn test_validate_text_trims() {
        assert_eq!(validate_text("make", "  Honda \n").unwrap(), "Honda");
    }

    #[test]
    fn test_validate_text_rejects_delimiter() {
        let err = validate_text("model", "Civic|Type R").unwrap_err();
        assert!(matches!(err, RentalError::InvalidField { field: "model", .. }));
    }

    #[test]
    fn test_validate_text_rejects_inner_newline() {
        assert!(validate_text("make", "Ho\nnda").is_err());
    }

    #[test]
    fn test_validate_text_rejects_control_characters() {
        assert!(validate_text("make", "Ho\tnda").is_err());
        assert!(validate_text("renter ID", "ID\u{7f}12").is_err());
        assert!(validate_text("model", "Civic\u{0}").is_err());
    }

    #[test]
    fn test_rent_with_unrepresentable_cost() {
        let mut car = VehicleRecord::new(1, "Kia".into(), "Rio".into(), 2021, 1e306);
        let err = car.rent(1000, "Alice".into(), "ID123".into()).unwrap_err();
        assert!(matches!(err, RentalError::InvalidDuration(1000)));
        assert!(car.available);
        assert!(car.renter_name.is_empty());
        assert_eq!(car.total_cost, 0.0);
    }

    #[test]
    fn test_validate_text_rejects_empty() {
        assert!(validate_text("renter name", "   ").is_err());
    }

    #[test]
    fn test_validate_text_length_limit() {
        let ok = "x".repeat(MAX_TEXT_LEN);
        let too_long = "x".repeat(MAX_TEXT_LEN + 1);
        assert!(validate_text("make", &ok).is_ok());
        assert!(validate_text("make", &too_long).is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert_eq!(validate_rate(19.999).unwrap(), 20.0);
        assert_eq!(validate_rate(0.0).unwrap(), 0.0);
        assert!(validate_rate(-1.0).is_err());
        assert!(validate_rate(f64::NAN).is_err());
        assert!(validate_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_rate_rejects_overflow_when_rounding() {
        assert!(validate_rate(1e307).is_err());
        assert!(validate_rate(f64::MAX).is_err());
        assert_eq!(validate_rate(1e300).unwrap(), round_cents(1e300));
    }

    #[test]
    fn test_round_cents_survives_format() {
        let cost = round_cents(3.0 * 0.1);
        let reparsed: f64 = format!("{:.2}", cost).parse().unwrap();
        assert_eq!(reparsed, cost);
    }
}
