use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("cannot open source file {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: expected {expected} fields, found {found}")]
    MalformedRecord {
        path: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("grade record references unknown {entity} CWID {cwid}")]
    UnknownReference { entity: &'static str, cwid: String },

    #[error("student {cwid} declares unknown major {dept}")]
    UnknownMajor { cwid: String, dept: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
