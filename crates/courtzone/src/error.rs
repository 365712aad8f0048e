use thiserror::Error;

pub type Result<T> = std::result::Result<T, CourtError>;

#[derive(Debug, Error)]
pub enum CourtError {
    #[error("Invalid {field}: '{value}' (expected one of: {expected})")]
    InvalidArgument {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("Coordinate length mismatch: x has {x_len} values, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("Invalid {field}: need at least {min}, got {got}")]
    InvalidSampleCount {
        field: &'static str,
        min: usize,
        got: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid CSV Header: {0}")]
    CsvHeader(String),

    #[error("Invalid CSV row {row}: expected at least 2 columns, got {got}")]
    CsvRow { row: usize, got: usize },

    #[error("Invalid coordinate at row {row}: {value}")]
    CoordinateParse {
        row: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl CourtError {
    /// True for every caller-input error (bad enum token, shape mismatch, bad count).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CourtError::InvalidArgument { .. }
                | CourtError::LengthMismatch { .. }
                | CourtError::InvalidSampleCount { .. }
        )
    }

    pub(crate) fn invalid(field: &'static str, value: &str, expected: &[String]) -> Self {
        CourtError::InvalidArgument {
            field,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }
}

impl From<toml::de::Error> for CourtError {
    fn from(err: toml::de::Error) -> Self {
        CourtError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<serde_json::Error> for CourtError {
    fn from(err: serde_json::Error) -> Self {
        CourtError::Json(err.to_string())
    }
}

/// Fails with `LengthMismatch` unless both coordinate sequences have the same length.
pub(crate) fn check_lengths(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(CourtError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok(())
}
