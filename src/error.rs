use thiserror::Error;

use unitconv_registry::CategoryKey;

/// Failure of a registry lookup or a conversion.
///
/// Every variant is a validation failure described entirely by the bad
/// input; retrying the same request cannot succeed.
#[derive(Error, Debug, Clone)]
pub enum ConvertError {
    /// The category key is not registered.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// The unit code does not belong to the category.
    #[error("unknown unit '{unit}' in category '{category}'")]
    UnknownUnit { category: String, unit: String },

    /// The magnitude is NaN or infinite.
    #[error("invalid magnitude: {0}")]
    InvalidMagnitude(f64),
}

/// Rejection of raw text input by a [`Session`](crate::Session).
///
/// The `Display` strings are the messages a front end shows in place of a
/// result.
#[derive(Error, Debug, Clone)]
pub enum InputError {
    /// Nothing (or only whitespace) was entered.
    #[error("Enter a value to convert.")]
    Empty,

    /// The text does not parse as a number.
    #[error("Please enter a valid number.")]
    NotANumber(String),

    /// Negative magnitudes are blocked outside temperature.
    #[error("Negative values are not allowed for {0} conversions.")]
    NegativeNotAllowed(CategoryKey),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Failure while writing an exported report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
