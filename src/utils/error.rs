use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed store '{path}': {source}")]
    MalformedStoreError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input '{value}' for {field}: {reason}")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RegistryError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::IoError(e) => format!("Could not read or write a file: {}", e),
            RegistryError::MalformedStoreError { path, .. } => {
                format!("The data file '{}' is not a valid parcel store", path)
            }
            RegistryError::SerializationError(_) => {
                "Parcel data could not be encoded for saving".to_string()
            }
            RegistryError::ConfigError { message } => format!("Configuration problem: {}", message),
            RegistryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            RegistryError::InvalidInputError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RegistryError::IoError(_) => "Check that the path exists and is writable",
            RegistryError::MalformedStoreError { .. } => {
                "Fix or move the data file aside; a missing file starts an empty registry"
            }
            RegistryError::SerializationError(_) => "Check parcel values for non-finite numbers",
            RegistryError::ConfigError { .. } | RegistryError::InvalidConfigValueError { .. } => {
                "Review the config file and command-line flags"
            }
            RegistryError::InvalidInputError { .. } => "Enter the value again",
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
