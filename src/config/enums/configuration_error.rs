use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[error("{0}")]
    ParseError(#[from] toml::de::Error),
    #[error("invalid value for {field}: {reason}")]
    ValidationError { field: String, reason: String },
}
