use crate::domain::session::{SessionError, User};
use crate::domain::topic::{FetchError, Topic, TopicQuery};
use async_trait::async_trait;

pub mod http;

pub use http::ForumHttpClient;

/// Gateway to the topics endpoint. Abstracts the transport so the
/// loader can be driven by a scripted implementation in tests.
///
/// Implementations are responsible for:
/// - Dropping individual records that fail to deserialize (one bad
///   record must not fail the page)
/// - Mapping transport, status and payload failures onto `FetchError`
#[async_trait]
pub trait TopicGateway: Send + Sync {
    /// Fetch one page of topics, in server order.
    async fn fetch_topics(&self, query: &TopicQuery) -> Result<Vec<Topic>, FetchError>;
}

/// Gateway to the sessions endpoint.
#[async_trait]
pub trait SessionGateway: Send + Sync {
    /// Exchange credentials for the signed-in user.
    async fn sign_in(&self, username: &str, password: &str) -> Result<User, SessionError>;
}
