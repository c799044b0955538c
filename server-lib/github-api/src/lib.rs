pub mod error;
pub mod search;

pub use error::{ApiError, Result};

pub(crate) const GITHUB_HOST: &str = "https://api.github.com";
pub(crate) const GITHUB_ACCEPT: &str = "application/vnd.github+json";

// github rejects requests without user agent
pub const UA: &str = concat!("rust-web-github-api/", env!("CARGO_PKG_VERSION"));
