use thiserror::Error;

/// Errors related to credential lookup.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("could not read env file '{path}': {message}")]
    EnvFile { path: String, message: String },
}

/// Errors related to loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("invalid config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("invalid value for {key}: '{value}'")]
    InvalidOverride { key: String, value: String },
}

/// Errors from building a prompt template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template is missing the {{input}} placeholder")]
    MissingPlaceholder,

    #[error("template contains {0} {{input}} placeholders, expected exactly one")]
    RepeatedPlaceholder(usize),
}
