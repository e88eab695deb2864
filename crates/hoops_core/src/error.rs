use std::path::PathBuf;
use thiserror::Error;

/// Dataset-level failures. These abort the whole run.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {kind} file {path:?}: {source}")]
    Io {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-token parse failures. Selectors absorb these and drop the row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    #[error("Invalid weight value: '{0}'")]
    InvalidWeight(String),
}

impl LoadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Io { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_message_names_file() {
        let err = LoadError::Io {
            kind: "roster",
            path: PathBuf::from("missing/players.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        let msg = err.to_string();
        assert!(msg.contains("roster"));
        assert!(msg.contains("missing/players.csv"));
        assert_eq!(err.path(), &PathBuf::from("missing/players.csv"));
    }

    #[test]
    fn test_unit_error_message() {
        let err = UnitError::InvalidWeight("heavy".to_string());
        assert_eq!(err.to_string(), "Invalid weight value: 'heavy'");
    }
}
