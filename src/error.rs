use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}

impl ShowcaseError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let error = ShowcaseError::invalid_config("fruits[2]", "fruit name must not be empty");
        let display = error.to_string();
        assert!(display.contains("fruits[2]"));
        assert!(display.contains("must not be empty"));
    }

    #[test]
    fn test_io_error_display_names_path() {
        let error = ShowcaseError::Io {
            path: PathBuf::from("basket.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let display = error.to_string();
        assert!(display.contains("basket.toml"));
        assert!(display.contains("no such file"));
    }

    #[test]
    fn test_output_error_from_io() {
        let error: ShowcaseError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(error, ShowcaseError::Output(_)));
    }
}
