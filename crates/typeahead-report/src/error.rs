use std::path::PathBuf;

use typeahead_model::ModelError;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown report: {name}")]
    UnknownReport { name: String },

    #[error("report '{report}' has no filter named '{field}'")]
    UnknownField { report: String, field: String },

    #[error("filter '{field}' of report '{report}' has no candidate source")]
    NoSource { report: String, field: String },

    #[error("invalid default for '{field}': {message}")]
    InvalidDefault { field: String, message: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
