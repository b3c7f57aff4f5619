/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or (de)serializing a deck.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A card with the same name is already in the deck.
    #[error("card already exists: \"{0}\"")]
    DuplicateName(String),

    /// A suit name did not match any of the four known suits.
    #[error("unknown suit: \"{0}\"")]
    UnknownSuit(String),

    /// The deck document could not be encoded or decoded as JSON.
    #[error("deck document JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
