use thiserror::Error;

pub type Result<T> = std::result::Result<T, RffError>;

#[derive(Debug, Error)]
pub enum RffError {
    #[error("config error: {0}")]
    Config(String),

    #[error("sampler decode error: {0}")]
    Decode(String),

    /// Raised on the save path when this process produced a bad parameter.
    #[error("sampler invariant violated: {0}")]
    Invariant(String),
}
