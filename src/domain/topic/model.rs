use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the topic list. Immutable once fetched; the whole
/// collection is replaced on refresh rather than merged by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub node_id: Option<i64>,
    #[serde(default)]
    pub node_name: Option<String>,
    #[serde(default)]
    pub user: Option<TopicAuthor>,
    #[serde(default)]
    pub replies_count: Option<i64>,
    #[serde(default)]
    pub replied_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicAuthor {
    pub id: i64,
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Sort mode of the topic list, matching the `type` parameter of the
/// topics endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopicFilter {
    #[default]
    #[serde(rename = "last_actived")]
    LastActived,
    #[serde(rename = "recent")]
    Recent,
    #[serde(rename = "popular")]
    Popular,
    #[serde(rename = "excellent")]
    Excellent,
}

impl TopicFilter {
    /// Get the wire name used by the topics endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicFilter::LastActived => "last_actived",
            TopicFilter::Recent => "recent",
            TopicFilter::Popular => "popular",
            TopicFilter::Excellent => "excellent",
        }
    }
}

impl std::fmt::Display for TopicFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a fetch is currently in flight. A new fetch may not start
/// while `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
}

/// Parameters of one page fetch. The cursor is simply the count of
/// items already held (`offset`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicQuery {
    pub filter: TopicFilter,
    pub node_id: Option<i64>,
    pub limit: usize,
    pub offset: usize,
}
