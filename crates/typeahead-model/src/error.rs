use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid field name '{0}': expected lowercase letters, digits and underscores")]
    InvalidFieldName(String),
    #[error("report '{report}' declares field '{field}' more than once")]
    DuplicateField { report: String, field: String },
    #[error("report name must not be empty")]
    EmptyReportName,
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
