use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrafficOverrideError {
    #[error("failure reading traffic override configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid traffic override configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failure reading trace: {0}")]
    TraceError(String),
    #[error("failure reading file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure processing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("{0}")]
    OtherError(String),
}
