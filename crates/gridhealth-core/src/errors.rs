use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config{}: {source}", display_path(.path))]
    ConfigParse {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to read grid {path}: {source}")]
    GridIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse grid {path}: {source}")]
    GridParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" {}", p.display()),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, SummaryError>;
