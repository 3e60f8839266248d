use thiserror::Error;

#[derive(Error, Debug)]
pub enum PushError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field {field}: '{value}' ({reason})")]
    InvalidValue { field: String, value: String, reason: String },

    #[error("Unknown push type: {0} (known types: {})", crate::push::type_names().join(", "))]
    UnknownType(String),

    #[error("Malformed line {line_no}: '{line}'")]
    MalformedLine { line_no: usize, line: String },

    #[error("Invalid count on line {line_no}: '{value}'")]
    InvalidCount { line_no: usize, value: String },

    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
}

impl PushError {
    pub fn missing(field: &str) -> Self {
        PushError::MissingField { field: field.to_string() }
    }

    /// True when the error is an input-contract violation rather than an I/O failure.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, PushError::Io(_))
    }
}

pub type PushResult<T> = std::result::Result<T, PushError>;
