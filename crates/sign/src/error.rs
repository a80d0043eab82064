//! Error types for the signature crate

use core::fmt;

/// Errors that can occur during signature operations
#[derive(Debug, Clone)]
pub enum Error {
    /// Invalid key
    InvalidKey(String),

    /// Signature generation failed
    SignatureGeneration {
        /// Additional details about the failure
        details: String,
    },

    /// Encoding error
    Encoding(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::SignatureGeneration { details } => {
                write!(f, "Signature generation failed: {}", details)
            }
            Error::Encoding(msg) => write!(f, "Encoding error: {}", msg),
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// Convert from the algorithms-crate error
impl From<koblitz_algorithms::error::Error> for Error {
    fn from(err: koblitz_algorithms::error::Error) -> Self {
        use koblitz_algorithms::error::Error as AlgoError;

        match err {
            AlgoError::Parameter { name, reason } => {
                Error::Internal(format!("{}: {}", name, reason))
            }
            AlgoError::Length {
                context,
                expected,
                actual,
            } => Error::Encoding(format!(
                "{}: expected {} bytes, got {}",
                context, expected, actual
            )),
            AlgoError::NotInvertible { context } => {
                Error::Internal(format!("no modular inverse in {}", context))
            }
            AlgoError::Other(msg) => Error::Internal(msg.to_string()),
        }
    }
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;
