use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON decoding error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{stage} stage failed: {source}")]
    StageError {
        stage: &'static str,
        #[source]
        source: Box<ReportError>,
    },
}

impl ReportError {
    /// Tag an error with the pipeline stage it aborted, so the fatal
    /// diagnostic names the failing operation. Re-tagging keeps the
    /// innermost stage.
    pub fn at_stage(self, stage: &'static str) -> ReportError {
        match self {
            err @ ReportError::StageError { .. } => err,
            err => ReportError::StageError {
                stage,
                source: Box::new(err),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
