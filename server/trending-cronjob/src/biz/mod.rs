pub mod fetch_trending;
pub mod save_artifact;
