//! Единый тип ошибок публичного API.

use crate::model::RecordType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtmError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    /// Нарушен инвариант записи: обе стороны пусты.
    #[error("Validation error: both from and to {field} are missing")]
    Validation { field: &'static str },

    /// Строка SYSTEM с ненулевой суммой: счёт заведён с начальным остатком.
    #[error(
        "Malformed input: account {account} was created with an initial amount, \
         please re-enter it as an income record with a proper date"
    )]
    MalformedInput { account: String },

    #[error("Unsupported conversion: {0} record cannot be converted to Moze")]
    UnsupportedConversion(RecordType),

    #[error("line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: Box<AtmError>,
    },
}

pub type Result<T> = std::result::Result<T, AtmError>;
