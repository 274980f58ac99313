use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Operand is empty")]
    EmptyOperand,

    #[error("Invalid operand {0:?}: expected decimal digits only")]
    InvalidOperand(String),

    #[error("Digit lengths must be positive")]
    ZeroDigitLength,

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Unknown chart: {0}")]
    UnknownChart(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

#[cfg(feature = "server")]
impl From<Error> for axum::http::StatusCode {
    fn from(err: Error) -> Self {
        use axum::http::StatusCode;
        match err {
            Error::EmptyOperand
            | Error::InvalidOperand(_)
            | Error::ZeroDigitLength
            | Error::UnknownAlgorithm(_)
            | Error::UnknownChart(_) => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Io(_) | Error::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
