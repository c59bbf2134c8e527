//! Social collector payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Keywords the social collector tags posts with.
///
/// This list is independent from the narrative vocabularies.
pub const SOCIAL_KEYWORDS: &[&str] =
    &["solana", "new project", "launch", "announcement", "airdrop"];

/// The social collector's output: one entry per tagged post.
pub type SocialPayload = Vec<SocialPost>;

/// A collected social post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialPost {
    /// Keywords attached by the collector.
    #[serde(deserialize_with = "super::null_as_default")]
    pub keywords: Vec<String>,
    pub engagement: Option<Engagement>,
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub urls: Vec<String>,
}

/// Interaction counts on a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Engagement {
    #[serde(deserialize_with = "super::null_as_default")]
    pub likes: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub retweets: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub replies: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_without_engagement() {
        let posts: SocialPayload = serde_json::from_str(
            r#"[{
                "keywords": ["launch"],
                "author": "@builder",
                "content": "We launch today",
                "urls": []
            }]"#,
        )
        .unwrap();

        assert_eq!(posts.len(), 1);
        assert!(posts[0].engagement.is_none());
        assert!(posts[0].timestamp.is_none());
    }

    #[test]
    fn test_partial_engagement() {
        let post: SocialPost =
            serde_json::from_str(r#"{"keywords": ["airdrop"], "engagement": {"likes": 10}}"#)
                .unwrap();
        let engagement = post.engagement.unwrap();
        assert_eq!(engagement.likes, 10);
        assert_eq!(engagement.retweets, 0);
        assert_eq!(engagement.replies, 0);
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let posts: SocialPayload = serde_json::from_str(
            r#"[
                {"keywords": ["launch"], "author": "@builder", "content": "We launch today"},
                {
                    "keywords": null,
                    "author": null,
                    "content": null,
                    "urls": null,
                    "engagement": {"likes": null, "retweets": 4, "replies": null}
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].keywords, vec!["launch".to_string()]);

        let sparse = &posts[1];
        assert!(sparse.keywords.is_empty());
        assert!(sparse.author.is_empty());
        assert!(sparse.content.is_empty());
        assert!(sparse.urls.is_empty());
        assert_eq!(
            sparse.engagement,
            Some(Engagement {
                likes: 0,
                retweets: 4,
                replies: 0,
            })
        );
    }
}
