pub mod config;
pub mod error;
pub mod github;
pub mod models;

pub use config::Config;
pub use error::{Error, Result};
pub use github::{GitHubClient, SearchKind};
pub use models::ContributorInfo;
