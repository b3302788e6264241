use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompareError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompareError {
    #[error("Duplicate field_id \"{field_id}\" in version \"{version_id}\". Field ids must be unique within a version.")]
    DuplicateFieldId { field_id: String, version_id: String },

    #[error("Cannot compare version \"{version_id}\" against itself")]
    IdenticalVersions { version_id: String },

    #[error("No data found for version \"{version_id}\"")]
    MissingVersionData { version_id: String },

    #[error("Invalid field \"{field_id}\" in version \"{version_id}\": {reason}")]
    InvalidFieldRecord {
        field_id: String,
        version_id: String,
        reason: String,
    },

    #[error("Position tolerance must be a finite, non-negative number (got {0})")]
    InvalidTolerance(f64),

    #[error("Required column \"{0}\" not found in field export")]
    MissingColumn(String),

    #[error("Failed to parse field export at line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CompareError {
    /// Stable tag a hosting layer can map to its own status codes.
    pub fn kind(&self) -> &'static str {
        match self {
            CompareError::DuplicateFieldId { .. } => "duplicate_field_id",
            CompareError::IdenticalVersions { .. } => "identical_versions",
            CompareError::MissingVersionData { .. } => "missing_version_data",
            CompareError::InvalidFieldRecord { .. } => "invalid_field_record",
            CompareError::InvalidTolerance(_) => "invalid_tolerance",
            CompareError::MissingColumn(_) => "missing_column",
            CompareError::Parse { .. } => "parse_error",
            CompareError::Serialization(_) => "serialization_error",
        }
    }
}

impl From<csv::Error> for CompareError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        CompareError::Parse {
            line,
            message: err.to_string(),
        }
    }
}
