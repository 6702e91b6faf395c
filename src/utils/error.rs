use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArrayError {
    #[error("Expected a JSON array, found {found}")]
    NotAnArray { found: String },

    #[error("Invalid key pointer '{pointer}': must be empty or start with '/'")]
    InvalidPointer { pointer: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error for '{field}' ({value}): {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ArrayError {
    pub fn not_an_array(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        };
        ArrayError::NotAnArray {
            found: found.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ArrayError::NotAnArray { .. } => "Pass a JSON array such as [1, [2, 3]]",
            ArrayError::InvalidPointer { .. } => {
                "Use a JSON pointer like /job or /address/city to select the key"
            }
            ArrayError::SerializationError(_) => "Check that the input is valid JSON",
            ArrayError::IoError(_) => "Check that stdin is readable",
            ArrayError::ValidationError { .. } => "Run with --help to see the expected arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, ArrayError>;
