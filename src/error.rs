//! Error types shared by the input validation layer and the benchmark core.

use std::fmt;

use thiserror::Error;

/// Form field an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ArraySize,
    UniqueValues,
}

/// What the user is asked for when the text does not parse.
fn valid_prompt(field: &Field) -> &'static str {
    match field {
        Field::ArraySize => "a valid array size",
        Field::UniqueValues => "a valid number for unique values",
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::ArraySize => f.write_str("an array size"),
            Field::UniqueValues => f.write_str("unique values"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Field text is not an integer.
    #[error("Please enter {}", valid_prompt(.field))]
    InputNotNumeric { field: Field, text: String },

    /// Field parsed, but lies outside `[min, max]`.
    #[error("Please enter {field} between {min} and {max}")]
    InputOutOfRange {
        field: Field,
        value: i64,
        min: usize,
        max: usize,
    },

    /// The core was called with arguments the caller should have rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
