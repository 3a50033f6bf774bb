use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("terminal failure: {0}")]
    Terminal(#[from] std::io::Error),
}
