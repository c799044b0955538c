use github_api::search::{
    search_repositories, search_repositories_internal, Repository, SearchRepositoriesRequest,
};

use crate::error::Result;
use crate::model::RepoRecord;

/// `host` overrides api.github.com, tests point it at a mock server.
pub async fn fetch_top(host: Option<&str>, per_page: u32) -> Result<Vec<RepoRecord>> {
    log::info!("fetching trending repositories...");
    let req = SearchRepositoriesRequest::most_starred(per_page);
    let resp = match host {
        Some(host) => search_repositories_internal(host, &req).await?,
        None => search_repositories(&req).await?,
    };

    if resp.incomplete_results {
        log::warn!("github search timed out, results are incomplete");
    }

    let records = project(resp.items);
    log::info!("fetched {} repositories", records.len());
    Ok(records)
}

// order is github's, already sorted by stars
pub fn project(items: Vec<Repository>) -> Vec<RepoRecord> {
    items.into_iter().map(RepoRecord::from).collect()
}
