use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimit {
    pub resources: RateLimitResources,
    pub rate: RateLimitWindow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitResources {
    pub core: RateLimitWindow,
    pub search: RateLimitWindow,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateLimitWindow {
    pub limit: u32,
    pub used: u32,
    pub remaining: u32,
    pub reset: u64,
}
