use thiserror::Error;

/// Core error types for fwlearn
///
/// All errors here describe authoring mistakes in the builtin catalog or
/// failures on the CLI export path. Runtime UI interaction never errors:
/// invalid selections degrade to "no selection".
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Two catalog entries share an identifier
    #[error("duplicate catalog id in {catalog}: {id}")]
    DuplicateId { catalog: &'static str, id: String },

    /// A security level entry declares a level outside 1-5
    #[error("security level {0} out of range (expected 1-5)")]
    LevelOutOfRange(u8),

    /// Two security level entries declare the same level
    #[error("duplicate security level: {0}")]
    DuplicateLevel(u8),

    /// The level ladder has a hole in it
    #[error("security levels must cover 1-5 without gaps: missing level {0}")]
    LevelGap(u8),

    /// The default error scenario id points at nothing
    #[error("default scenario id not present in catalog: {0}")]
    UnknownDefaultScenario(String),
}

pub type Result<T> = std::result::Result<T, Error>;
