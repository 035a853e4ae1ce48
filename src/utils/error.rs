use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Usage error: {message}")]
    UsageError { message: String },

    #[error("Request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("HTTP error: status code {status}")]
    HttpStatusError { status: u16 },

    #[error("Empty response from server")]
    EmptyResponseError,

    #[error("XML parse error: {}", .diagnostics.join("; "))]
    ParseError { diagnostics: Vec<String> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Network,
    Parse,
    Io,
}

impl CheckError {
    pub fn usage(message: impl Into<String>) -> Self {
        CheckError::UsageError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::UsageError { .. } => ErrorCategory::Usage,
            CheckError::TransportError(_)
            | CheckError::HttpStatusError { .. }
            | CheckError::EmptyResponseError => ErrorCategory::Network,
            CheckError::ParseError { .. } => ErrorCategory::Parse,
            CheckError::IoError(_) | CheckError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    /// Text written to stderr before the process exits.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::UsageError { message } => format!("Error: {}", message),
            CheckError::TransportError(e) => format!("Error while performing request: {}", e),
            CheckError::HttpStatusError { status } => format!("HTTP error: code {}", status),
            CheckError::EmptyResponseError => "Error: empty response from server".to_string(),
            CheckError::ParseError { diagnostics } => {
                let mut message = String::from("XML parse error:");
                for diagnostic in diagnostics {
                    message.push_str("\n  ");
                    message.push_str(diagnostic.trim());
                }
                message
            }
            CheckError::IoError(e) => format!("Error: I/O failure: {}", e),
            CheckError::SerializationError(e) => format!("Error: could not encode output: {}", e),
        }
    }

    pub fn exit_code(&self) -> u8 {
        1
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
