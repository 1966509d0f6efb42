use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to write chart: {0}")]
    Io(#[from] std::io::Error),
}
