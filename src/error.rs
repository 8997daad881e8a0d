use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart config: {0}")]
    InvalidConfig(String),

    #[error("renderer failed to apply chart description: {0}")]
    Renderer(String),
}
