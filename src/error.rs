use thiserror::Error;

/// Application-level errors: the closed failure taxonomy of every public
/// operation, plus the I/O-adjacent concerns the CLI and snapshot I/O layer
/// bring in.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Engine-level errors: the closed taxonomy every Conjugator/Validator/
/// Generator/Scheduler/snapshot operation can fail with. No operation
/// panics or returns partial state on one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// `conjugate`/`full_table`/`ensure_card`: verb not in the declared set.
    #[error("unknown verb: {0}")]
    UnknownVerb(String),

    /// `record_result`: card_id was never created by `ensure_card`.
    #[error("unknown card: {0}")]
    UnknownCard(String),

    /// `record_result`: quality outside the closed 0..=5 range.
    #[error("invalid quality: {0} (must be 0..=5)")]
    InvalidQuality(u8),

    /// `generate`: no exercise satisfies the requested constraints.
    #[error("no candidate exercise satisfies the given constraints")]
    NoCandidate,

    /// `import_state`: malformed or version-incompatible snapshot. Import
    /// is atomic: a corrupt snapshot never leaves partial state adopted.
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
pub type EngineResult<T> = std::result::Result<T, EngineError>;
