//! Common error types for the interval fixer services

use thiserror::Error;

/// Common result type for interval fixer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the interval fixer crates
///
/// The reconciler itself never fails and request validation has its own
/// error types; these cover configuration loading.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML configuration file could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_error_converts() {
        let err: Error = toml::from_str::<toml::Value>("level = ")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::TomlParse(_)));
        assert!(err.to_string().starts_with("TOML parse error"));
    }

    #[test]
    fn test_io_error_converts() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "IO error: gone");
    }

    #[test]
    fn test_config_error_message() {
        let err = Error::Config("api_presets: empty".to_string());
        assert_eq!(err.to_string(), "Configuration error: api_presets: empty");
    }
}
