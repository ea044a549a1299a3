use crate::domain::model::{Field, PackageMeasurement};
use thiserror::Error;

/// Rejection of a package input. Nothing is classified when one is returned.
///
/// `NotPositive` means the value was a whole number outside the domain;
/// `NotIntegral` means the text could not be read as a whole number at all
/// (fractional, non-numeric, or beyond the `i64` range).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: Field, value: i64 },

    #[error("{field} must be a whole number, got \"{input}\"")]
    NotIntegral { field: Field, input: String },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NotPositive { field, .. } => *field,
            ValidationError::NotIntegral { field, .. } => *field,
        }
    }
}

pub fn validate_positive(field: Field, value: i64) -> Result<i64, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(value)
}

/// Reads `input` as a base-10 whole number. Surrounding whitespace and a
/// leading `+` are accepted; anything else that `i64` parsing refuses is not.
pub fn parse_whole_number(field: Field, input: &str) -> Result<i64, ValidationError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotIntegral {
            field,
            input: input.to_string(),
        })
}

impl PackageMeasurement {
    /// Checks width, height, length and mass in that order and reports the
    /// first one that is not strictly positive.
    pub fn new(width: i64, height: i64, length: i64, mass: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            width: validate_positive(Field::Width, width)?,
            height: validate_positive(Field::Height, height)?,
            length: validate_positive(Field::Length, length)?,
            mass: validate_positive(Field::Mass, mass)?,
        })
    }

    /// Text counterpart of [`PackageMeasurement::new`]. Each field is first
    /// read as a whole number, then checked for positivity, before moving on
    /// to the next field.
    pub fn parse(width: &str, height: &str, length: &str, mass: &str) -> Result<Self, ValidationError> {
        let mut values = [0i64; 4];
        for (slot, (field, input)) in values
            .iter_mut()
            .zip(Field::ALL.into_iter().zip([width, height, length, mass]))
        {
            *slot = validate_positive(field, parse_whole_number(field, input)?)?;
        }
        let [width, height, length, mass] = values;
        Ok(Self { width, height, length, mass })
    }
}
