#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A stored row references another row that cannot be resolved.
    #[error("Integrity error: {0}")]
    Integrity(String),
}
