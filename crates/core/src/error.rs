/// Domain-level failures. Validation messages are user-facing product copy
/// and render without a prefix.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),
}
