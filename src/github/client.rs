use chrono::{DateTime, Utc};
use reqwest::{header, Client, Response};
use serde::Deserialize;

use crate::config::{DEFAULT_SEARCH_PAGES, DEFAULT_SEARCH_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::github::search::{SearchKind, GITHUB_WEB_BASE};
use crate::models::{ContributorInfo, GitHubUser, RateLimit, SearchResults};

/// Error envelope GitHub returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

pub struct GitHubClient {
    client: Client,
    base_url: String,
    search_pages: u32,
    search_page_size: u32,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("token {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("contribution-leaderboard/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: "https://api.github.com".to_string(),
            search_pages: DEFAULT_SEARCH_PAGES,
            search_page_size: DEFAULT_SEARCH_PAGE_SIZE,
        })
    }

    /// Overrides how many search pages are fetched per query and how many
    /// items each page requests (GitHub caps `per_page` at 100).
    pub fn with_search_limits(mut self, pages: u32, page_size: u32) -> Self {
        self.search_pages = pages;
        self.search_page_size = page_size;
        self
    }

    /// Points the client at a different API host. Tests use this to talk to
    /// a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|err| {
            if err.is_timeout() {
                tracing::warn!("Request timed out: {}", url);
                Error::Timeout
            } else {
                Error::Network(err)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => status.to_string(),
            };
            if message == "Bad credentials" {
                tracing::error!("GitHub rejected the configured token");
                return Err(Error::BadCredentials);
            }
            tracing::warn!("GitHub API error: {}", message);
            return Err(Error::GitHubApi(message));
        }

        Ok(response)
    }

    /// Fetches the current quota state. Search is the window this tool
    /// drains; core covers everything else.
    pub async fn check_rate_limit(&self) -> Result<RateLimit> {
        let url = format!("{}/rate_limit", self.base_url);
        let response = self.get(&url).await?;
        Ok(response.json().await?)
    }

    pub async fn contributor_avatar(&self, contributor: &str) -> Result<String> {
        let url = format!("{}/users/{}", self.base_url, contributor);
        let response = self.get(&url).await?;
        let user: GitHubUser = response.json().await?;
        Ok(user.avatar_url)
    }

    pub async fn open_prs_created_times(
        &self,
        organization: &str,
        contributor: &str,
        page: u32,
    ) -> Result<Vec<DateTime<Utc>>> {
        self.search_created_times(SearchKind::OpenPrs, organization, contributor, page)
            .await
    }

    pub async fn merged_prs_created_times(
        &self,
        organization: &str,
        contributor: &str,
        page: u32,
    ) -> Result<Vec<DateTime<Utc>>> {
        self.search_created_times(SearchKind::MergedPrs, organization, contributor, page)
            .await
    }

    pub async fn issues_created_times(
        &self,
        organization: &str,
        contributor: &str,
        page: u32,
    ) -> Result<Vec<DateTime<Utc>>> {
        self.search_created_times(SearchKind::Issues, organization, contributor, page)
            .await
    }

    /// One page of a search query, reduced to the creation timestamps of its
    /// items in response order.
    async fn search_created_times(
        &self,
        kind: SearchKind,
        organization: &str,
        contributor: &str,
        page: u32,
    ) -> Result<Vec<DateTime<Utc>>> {
        let url = format!(
            "{}/search/issues?q={}&page={}&per_page={}",
            self.base_url,
            kind.query(organization, contributor),
            page,
            self.search_page_size
        );
        let response = self.get(&url).await?;
        let results: SearchResults = response.json().await?;
        Ok(results
            .items
            .into_iter()
            .map(|item| item.created_at)
            .collect())
    }

    /// Assembles the full leaderboard record for one contributor.
    ///
    /// Pages are fetched strictly sequentially, one query at a time, so the
    /// search quota drains predictably: `3 queries x search_pages` round
    /// trips plus one avatar lookup.
    pub async fn contributor_info(
        &self,
        organization: &str,
        contributor: &str,
    ) -> Result<ContributorInfo> {
        tracing::info!("Fetching contribution data for: {}", contributor);

        let mut open_prs_created_times = Vec::new();
        let mut merged_prs_created_times = Vec::new();
        let mut issues_created_times = Vec::new();

        for page in 1..=self.search_pages {
            open_prs_created_times.extend(
                self.open_prs_created_times(organization, contributor, page)
                    .await?,
            );
            merged_prs_created_times.extend(
                self.merged_prs_created_times(organization, contributor, page)
                    .await?,
            );
            issues_created_times.extend(
                self.issues_created_times(organization, contributor, page)
                    .await?,
            );
        }

        let avatar_url = self.contributor_avatar(contributor).await?;

        Ok(ContributorInfo {
            home: format!("{}/{}", GITHUB_WEB_BASE, contributor),
            avatar_url,
            open_prs_created_times,
            open_prs_link: SearchKind::OpenPrs.web_link(organization, contributor),
            merged_prs_created_times,
            merged_prs_link: SearchKind::MergedPrs.web_link(organization, contributor),
            issues_created_times,
            issues_link: SearchKind::Issues.web_link(organization, contributor),
        })
    }
}
