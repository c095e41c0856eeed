use thiserror::Error;

pub type TraceViewResult<T> = Result<T, TraceViewError>;

#[derive(Debug, Error)]
pub enum TraceViewError {
    #[error("invalid container size: width={width}, height={height}")]
    InvalidContainer { width: f64, height: f64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
