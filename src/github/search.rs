pub const GITHUB_WEB_BASE: &str = "https://github.com";

/// The three search queries backing a contributor's leaderboard row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    OpenPrs,
    MergedPrs,
    Issues,
}

impl SearchKind {
    /// Renders the `q=` value in GitHub's search-issue syntax. Qualifiers
    /// are `+`-joined on the wire, the form GitHub's own UI produces.
    pub fn query(&self, organization: &str, contributor: &str) -> String {
        match self {
            SearchKind::OpenPrs => format!(
                "is:pr+org:{}+author:{}+is:open",
                organization, contributor
            ),
            SearchKind::MergedPrs => format!(
                "is:pr+org:{}+author:{}+is:merged",
                organization, contributor
            ),
            SearchKind::Issues => format!("is:issue+org:{}+author:{}", organization, contributor),
        }
    }

    /// Deep link into the github.com search UI for the same query.
    pub fn web_link(&self, organization: &str, contributor: &str) -> String {
        let path = match self {
            SearchKind::OpenPrs | SearchKind::MergedPrs => "pulls",
            SearchKind::Issues => "issues",
        };
        format!(
            "{}/{}?q={}",
            GITHUB_WEB_BASE,
            path,
            self.query(organization, contributor)
        )
    }
}
