use thiserror::Error;

/// Why a candidate passenger record was rejected.
///
/// Every variant renders to the same sentinel in the formatted output; the
/// distinction only survives through [`crate::PassFormatter::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPass {
    #[error("passenger is not a record")]
    NotARecord,

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("field {field} is not text")]
    NotText { field: &'static str },

    #[error("field {field} is empty or whitespace-only")]
    EmptyField { field: &'static str },

    #[error("unknown class type: {value}")]
    UnknownClass { value: String },
}

impl InvalidPass {
    /// The offending field, if the rejection is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            InvalidPass::NotARecord => None,
            InvalidPass::MissingField { field }
            | InvalidPass::NotText { field }
            | InvalidPass::EmptyField { field } => Some(field),
            InvalidPass::UnknownClass { .. } => Some("classType"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PassError {
    #[error("Invalid passenger: {0}")]
    InvalidPassenger(#[from] InvalidPass),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: field '{field}' has invalid value '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PassError {
    /// Process exit status for the binary: a rejected passenger is 2,
    /// everything else is an operational failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            PassError::InvalidPassenger(_) => 2,
            PassError::IoError(_)
            | PassError::SerializationError(_)
            | PassError::InvalidConfigValueError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PassError>;
