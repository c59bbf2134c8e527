//! The collector seam.
//!
//! Network collectors live outside this crate. Anything that can hand over a
//! payload implements [`Collector`]; the file-backed collectors here cover
//! payloads that were fetched earlier and saved as JSON.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use narrative_rules::{SocialPayload, SocialPost};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{CollectError, CollectResult};
use crate::signals::tag_social_text;

/// A source of one kind of payload.
pub trait Collector {
    /// What this collector produces. The default value stands in for a failed collection.
    type Payload: Default;

    /// Name used in log lines.
    fn name(&self) -> &str;

    fn collect(&self) -> CollectResult<Self::Payload>;
}

/// Hands out a fixed payload.
#[derive(Debug, Clone)]
pub struct StaticCollector<P> {
    name: String,
    payload: P,
}

impl<P> StaticCollector<P> {
    pub fn new(name: impl Into<String>, payload: P) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }
}

impl<P: Clone + Default> Collector for StaticCollector<P> {
    type Payload = P;

    fn name(&self) -> &str {
        &self.name
    }

    fn collect(&self) -> CollectResult<P> {
        Ok(self.payload.clone())
    }
}

/// Reads a payload from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileCollector<P> {
    name: String,
    path: PathBuf,
    _payload: PhantomData<fn() -> P>,
}

impl<P> JsonFileCollector<P> {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            _payload: PhantomData,
        }
    }
}

impl<P: DeserializeOwned + Default> Collector for JsonFileCollector<P> {
    type Payload = P;

    fn name(&self) -> &str {
        &self.name
    }

    fn collect(&self) -> CollectResult<P> {
        read_json(&self.path)
    }
}

/// Reads social posts from a JSON file and tags any post that arrives untagged.
///
/// Posts that end up with no tags are left out, the same way a live social
/// collector only forwards tagged posts.
#[derive(Debug, Clone)]
pub struct SocialFileCollector {
    path: PathBuf,
}

impl SocialFileCollector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Collector for SocialFileCollector {
    type Payload = SocialPayload;

    fn name(&self) -> &str {
        "social"
    }

    fn collect(&self) -> CollectResult<SocialPayload> {
        let posts: Vec<SocialPost> = read_json(&self.path)?;
        let total = posts.len();

        let tagged: SocialPayload = posts
            .into_iter()
            .map(|mut post| {
                if post.keywords.is_empty() {
                    post.keywords = tag_social_text(&post.content);
                }
                post
            })
            .filter(|post| !post.keywords.is_empty())
            .collect();

        debug!(total, tagged = tagged.len(), "tagged social posts");
        Ok(tagged)
    }
}

fn read_json<P: DeserializeOwned>(path: &Path) -> CollectResult<P> {
    let raw = fs::read_to_string(path).map_err(|source| CollectError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| CollectError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}
