use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    /// The strategy or runner rejected value generation
    #[error("Value generation rejected: {0}")]
    Generation(String),
    /// A tally was requested with `samples == 0`
    #[error("Sample config requests zero samples")]
    NoSamples,
    /// Report JSON rendering failed
    #[error("Report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SampleError>;
