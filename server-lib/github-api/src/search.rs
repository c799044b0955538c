use serde::{Deserialize, Serialize};

use crate::{ApiError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRepositoriesResponse {
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<Repository>,
}

// not implements all
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub full_name: String,
    pub html_url: String,
    pub stargazers_count: u64,
}

#[derive(Debug, Clone)]
pub struct SearchRepositoriesRequest {
    pub q: String,
    pub sort: &'static str,
    pub order: &'static str,
    pub per_page: u32,
}

impl SearchRepositoriesRequest {
    /// Most starred public repositories, one page.
    pub fn most_starred(per_page: u32) -> Self {
        SearchRepositoriesRequest {
            q: "stars:>1".to_string(),
            sort: "stars",
            order: "desc",
            per_page,
        }
    }

    fn query_pairs(&self) -> [(&'static str, String); 4] {
        [
            ("q", self.q.clone()),
            ("sort", self.sort.to_string()),
            ("order", self.order.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

/// Single page of `GET /search/repositories`. Items keep the order github returns.
pub async fn search_repositories(
    req: &SearchRepositoriesRequest,
) -> Result<SearchRepositoriesResponse> {
    search_repositories_internal(crate::GITHUB_HOST, req).await
}

pub async fn search_repositories_internal(
    host: &str,
    req: &SearchRepositoriesRequest,
) -> Result<SearchRepositoriesResponse> {
    log::info!(
        "[Github API] search_repositories, q={}, sort={}, order={}, per_page={}",
        req.q,
        req.sort,
        req.order,
        req.per_page
    );
    let url = format!("{host}/search/repositories");
    let client = reqwest::Client::new();
    let resp = client
        .get(url)
        .query(&req.query_pairs())
        .header(reqwest::header::USER_AGENT, crate::UA)
        .header(reqwest::header::ACCEPT, crate::GITHUB_ACCEPT)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        log::warn!("[Github API] search_repositories, status={status}");
        return Err(ApiError::Status {
            status: status.as_u16(),
        });
    }

    let raw_data = resp.text().await?;
    if cfg!(debug_assertions) {
        log::debug!("[Github API] search_repositories, resp={raw_data}");
    }

    Ok(serde_json::from_str(&raw_data)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn expect_query() -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "stars:>1".into()),
            Matcher::UrlEncoded("sort".into(), "stars".into()),
            Matcher::UrlEncoded("order".into(), "desc".into()),
            Matcher::UrlEncoded("per_page".into(), "10".into()),
        ])
    }

    #[test]
    pub fn test_search_repositories_success() {
        let mut server = mockito::Server::new();

        tokio_test::block_on(async {
            let response_body = json!({
                "total_count": 2,
                "incomplete_results": false,
                "items": [
                    {
                        "id": 1,
                        "name": "first",
                        "full_name": "owner/first",
                        "html_url": "https://github.com/owner/first",
                        "description": null,
                        "stargazers_count": 300,
                        "language": "Rust",
                        "forks_count": 12
                    },
                    {
                        "full_name": "owner/second",
                        "html_url": "https://github.com/owner/second",
                        "stargazers_count": 200
                    }
                ]
            })
            .to_string();

            let mock = server
                .mock("GET", "/search/repositories")
                .match_query(expect_query())
                .match_header("user-agent", crate::UA)
                .match_header("accept", crate::GITHUB_ACCEPT)
                .with_header("Content-Type", "application/json")
                .with_body(response_body)
                .create();

            let resp = search_repositories_internal(
                &server.url(),
                &SearchRepositoriesRequest::most_starred(10),
            )
            .await
            .expect("this http request should return success");

            assert!(!resp.incomplete_results);
            assert_eq!(resp.items.len(), 2);
            assert_eq!(resp.items[0].full_name, "owner/first");
            assert_eq!(resp.items[0].stargazers_count, 300);
            assert_eq!(resp.items[1].full_name, "owner/second");
            assert_eq!(resp.items[1].html_url, "https://github.com/owner/second");
            mock.assert();
        })
    }

    #[test]
    pub fn test_search_repositories_error_status() {
        let mut server = mockito::Server::new();

        tokio_test::block_on(async {
            let mock = server
                .mock("GET", "/search/repositories")
                .match_query(Matcher::Any)
                .with_status(500)
                .with_body("internal error")
                .create();

            let err = search_repositories_internal(
                &server.url(),
                &SearchRepositoriesRequest::most_starred(10),
            )
            .await
            .expect_err("status 500 should fail");

            assert!(matches!(err, ApiError::Status { status: 500 }));
            assert_eq!(err.to_string(), "GitHub API error: 500");
            mock.assert();
        })
    }

    #[test]
    pub fn test_search_repositories_malformed_body() {
        let mut server = mockito::Server::new();

        tokio_test::block_on(async {
            let mock = server
                .mock("GET", "/search/repositories")
                .match_query(Matcher::Any)
                .with_body("{\"items\": [")
                .create();

            let err = search_repositories_internal(
                &server.url(),
                &SearchRepositoriesRequest::most_starred(10),
            )
            .await
            .expect_err("truncated json should fail");

            assert!(matches!(err, ApiError::Decode(_)));
            mock.assert();
        })
    }

    #[test]
    pub fn test_search_repositories_missing_items() {
        let mut server = mockito::Server::new();

        tokio_test::block_on(async {
            let mock = server
                .mock("GET", "/search/repositories")
                .match_query(Matcher::Any)
                .with_body(json!({"message": "rate limited"}).to_string())
                .create();

            let err = search_repositories_internal(
                &server.url(),
                &SearchRepositoriesRequest::most_starred(10),
            )
            .await
            .expect_err("body without items should fail");

            assert!(matches!(err, ApiError::Decode(_)));
            mock.assert();
        })
    }

    #[test]
    pub fn test_search_repositories_connection_refused() {
        tokio_test::block_on(async {
            // nothing listens on port 1
            let err = search_repositories_internal(
                "http://127.0.0.1:1",
                &SearchRepositoriesRequest::most_starred(10),
            )
            .await
            .expect_err("connection should be refused");

            assert!(matches!(err, ApiError::Transport(_)));
        })
    }
}
