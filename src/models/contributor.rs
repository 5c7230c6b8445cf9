use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Composite per-contributor record consumed by the leaderboard frontend.
/// Field names on the wire match the keys the frontend already expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributorInfo {
    pub home: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: String,
    #[serde(rename = "openPRsCreatedTimes")]
    pub open_prs_created_times: Vec<DateTime<Utc>>,
    #[serde(rename = "openPRsLink")]
    pub open_prs_link: String,
    #[serde(rename = "mergedPRsCreatedTimes")]
    pub merged_prs_created_times: Vec<DateTime<Utc>>,
    #[serde(rename = "mergedPRsLink")]
    pub merged_prs_link: String,
    #[serde(rename = "issuesCreatedTimes")]
    pub issues_created_times: Vec<DateTime<Utc>>,
    #[serde(rename = "issuesLink")]
    pub issues_link: String,
}
