use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentalError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("car with ID {0} not found")]
    NotFound(u32),

    #[error("car {0} is already rented")]
    AlreadyRented(u32),

    #[error("car {0} is not currently rented")]
    NotRented(u32),

    #[error("invalid number of rental days: {0}")]
    InvalidDuration(i64),

    #[error("database is full ({0} cars), cannot add more")]
    CapacityExceeded(usize),

    #[error("no car IDs left to assign")]
    IdsExhausted,

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, RentalError>;
