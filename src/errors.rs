use thiserror::Error;

/// Rejected console input. Always recoverable: the caller re-prompts and no
/// game state changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("not a number: {0}")]
    NotANumber(String),

    /// Guess outside `1..=max` for the active tier.
    #[error("{value} is outside 1..={max}")]
    OutOfRange { value: i64, max: u32 },
}

/// Errors raised by the stats/high-score persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Wrapper around IO errors (directory creation, open, write).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON encode/decode errors.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Advisory file lock could not be taken.
    #[error("lock error: {0}")]
    Lock(String),
}

/// Top-level game error taxonomy.
#[derive(Debug, Error)]
pub enum GameError {
    /// Unknown difficulty tier id.
    #[error("difficulty not found: {0}")]
    NotFound(u8),

    /// Shop purchase attempted without enough points. Nothing is deducted.
    #[error("insufficient funds: need {cost}, have {balance}")]
    InsufficientFunds { cost: u64, balance: u64 },

    /// Unknown menu or shop selection.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Console reached end of input; the session loop stops.
    #[error("input closed")]
    InputClosed,
}
