use github_api::search::Repository;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    pub stars: u64,
    pub url: String,
}

impl From<Repository> for RepoRecord {
    fn from(value: Repository) -> Self {
        RepoRecord {
            name: value.full_name,
            stars: value.stargazers_count,
            url: value.html_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub run_id: String,
    pub items: Vec<RepoRecord>,
}
