//! Repository collector payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repositories found by the repository collector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RepositoryPayload {
    /// When the collector ran.
    pub timestamp: Option<DateTime<Utc>>,
    /// Popular repositories with recent pushes.
    #[serde(deserialize_with = "super::null_as_default")]
    pub trending_repos: Vec<TrendingRepo>,
    /// Repositories created within the last 7 days.
    #[serde(deserialize_with = "super::null_as_default")]
    pub new_repos: Vec<NewRepo>,
}

impl RepositoryPayload {
    /// Total number of repositories.
    pub fn record_count(&self) -> usize {
        self.trending_repos.len() + self.new_repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingRepo {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub topics: Option<Vec<String>>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub stars: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewRepo {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
