use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request github api fail: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API error: {status}")]
    Status { status: u16 },

    #[error("decode github api response fail: {0}")]
    Decode(#[from] serde_json::Error),
}
