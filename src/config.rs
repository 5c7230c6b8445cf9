use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_SEARCH_PAGES: u32 = 3;
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub max_search_pages: u32,
    pub search_page_size: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = env::var("GITHUB_TOKEN")
            .map_err(|_| Error::Config("GITHUB_TOKEN environment variable not set".to_string()))?;

        let max_search_pages = env::var("MAX_SEARCH_PAGES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SEARCH_PAGES);

        let search_page_size = env::var("SEARCH_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SEARCH_PAGE_SIZE);

        Ok(Self {
            github_token,
            max_search_pages,
            search_page_size,
        })
    }
}
