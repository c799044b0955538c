use github_api::ApiError;
use thiserror::Error;

use crate::runner::JobStage;

pub type Result<T> = std::result::Result<T, JobError>;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("{0}")]
    Upstream(ApiError),

    #[error("{0}")]
    Parse(ApiError),

    #[error("write artifact fail: {0}")]
    Io(#[from] std::io::Error),

    #[error("encode artifact fail: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<ApiError> for JobError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::Decode(_) => JobError::Parse(value),
            ApiError::Transport(_) | ApiError::Status { .. } => JobError::Upstream(value),
        }
    }
}

/// Terminal state of a run: the stage that was active and what broke it.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct JobFailure {
    pub stage: JobStage,
    pub error: JobError,
}
