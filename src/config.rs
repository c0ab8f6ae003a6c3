use crate::error::{Error, Field, Result};
use crate::generator::MAX_ARRAY_SIZE;

pub const DEFAULT_ARRAY_SIZE: usize = MAX_ARRAY_SIZE;
pub const DEFAULT_UNIQUE_VALUES: usize = MAX_ARRAY_SIZE / 2;

/// Validated benchmark input as entered by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub array_size: usize,
    pub unique_values: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            array_size: DEFAULT_ARRAY_SIZE,
            unique_values: DEFAULT_UNIQUE_VALUES,
        }
    }
}

impl BenchConfig {
    /// Parse and validate the two form fields.
    ///
    /// The array size is checked first, since it bounds the unique count.
    pub fn from_text(array_size: &str, unique_values: &str) -> Result<Self> {
        let array_size = parse_field(Field::ArraySize, array_size, MAX_ARRAY_SIZE)?;
        let unique_values = parse_field(Field::UniqueValues, unique_values, array_size)?;
        Ok(Self {
            array_size,
            unique_values,
        })
    }
}

fn parse_field(field: Field, text: &str, max: usize) -> Result<usize> {
    let value: i64 = text.trim().parse().map_err(|_| Error::InputNotNumeric {
        field,
        text: text.to_string(),
    })?;
    if value < 1 || value > max as i64 {
        return Err(Error::InputOutOfRange {
            field,
            value,
            min: 1,
            max,
        });
    }
    Ok(value as usize)
}
