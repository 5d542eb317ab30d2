use thiserror::Error;

pub type TickResult<T> = Result<T, TickError>;

#[derive(Debug, Error)]
pub enum TickError {
    #[error("invalid layout params: {0}")]
    InvalidParams(String),

    #[error("invalid tick level {index}: {reason}")]
    InvalidLevel { index: usize, reason: String },

    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("render backend failure: {0}")]
    Backend(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
