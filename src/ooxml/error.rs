/// Error types for chart and drawing operations.
use thiserror::Error;

/// Result type for chart and drawing operations.
pub type Result<T> = std::result::Result<T, OoxmlError>;

/// Error types for chart and drawing operations.
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// A cell name could not be parsed into coordinates
    #[error("Invalid cell reference: {0:?}")]
    InvalidCellReference(String),

    /// The chart kind identifier has no builder
    #[error("Unsupported chart kind: {0:?}")]
    UnsupportedChartKind(String),

    /// An existing part is present but cannot be decoded
    #[error("Corrupt part {part}: {reason}")]
    CorruptPart { part: String, reason: String },

    /// Two plot-area fragments populate the same slot
    #[error("Combo chart collision on plot-area slot {slot}")]
    ComboCollision { slot: &'static str },

    /// A chart kind that cannot be combined with others
    #[error("Invalid combo chart: {0}")]
    InvalidComboChart(String),

    /// Invalid chart or picture configuration
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Sheet, part or relationship not found
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<serde_json::Error> for OoxmlError {
    fn from(err: serde_json::Error) -> Self {
        OoxmlError::Json(err.to_string())
    }
}

impl OoxmlError {
    /// Build a [`OoxmlError::CorruptPart`] for the given part.
    pub fn corrupt(part: impl Into<String>, reason: impl ToString) -> Self {
        OoxmlError::CorruptPart {
            part: part.into(),
            reason: reason.to_string(),
        }
    }
}
