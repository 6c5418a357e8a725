use std::fmt;

/// Errors raised while constructing or deserializing a handling profile.
///
/// The simulation step itself has no failure paths: by the time a profile
/// reaches `step_frame` it is assumed well-formed, and a drift-start attempt
/// that cannot resolve is a silent no-op rather than an error.
#[derive(Debug)]
pub enum ProfileError {
    InvalidParameter(String),
    DeserializationError(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProfileError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            ProfileError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ProfileError {}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        ProfileError::DeserializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
