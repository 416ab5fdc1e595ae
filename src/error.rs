use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdiomError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to parse config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IdiomError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, IdiomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = IdiomError::invalid_argument("at least one argument is required");
        assert_eq!(
            err.to_string(),
            "Invalid argument: at least one argument is required"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }

        assert!(matches!(read_missing(), Err(IdiomError::Io(_))));
    }
}
