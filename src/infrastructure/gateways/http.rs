use super::{SessionGateway, TopicGateway};
use crate::domain::session::{SessionError, User};
use crate::domain::topic::{FetchError, Topic, TopicQuery};
use crate::infrastructure::config::Config;
use async_trait::async_trait;
use reqwest::StatusCode;

/// HTTP client for the forum JSON API.
pub struct ForumHttpClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ForumHttpClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone())
    }
}

#[async_trait]
impl TopicGateway for ForumHttpClient {
    async fn fetch_topics(&self, query: &TopicQuery) -> Result<Vec<Topic>, FetchError> {
        let mut params: Vec<(&str, String)> = vec![
            ("type", query.filter.as_str().to_string()),
            ("limit", query.limit.to_string()),
            ("offset", query.offset.to_string()),
        ];
        if let Some(node_id) = query.node_id {
            params.push(("node_id", node_id.to_string()));
        }

        let response = self
            .http_client
            .get(format!("{}/topics.json", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Server(status.as_u16()));
        }

        let records: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(parse_topics(records))
    }
}

#[async_trait]
impl SessionGateway for ForumHttpClient {
    async fn sign_in(&self, username: &str, password: &str) -> Result<User, SessionError> {
        let params = [("username", username), ("password", password)];

        let response = self
            .http_client
            .post(format!("{}/sessions.json", self.base_url))
            .form(&params)
            .send()
            .await
            .map_err(|e| SessionError::Fetch(FetchError::Transport(e.to_string())))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SessionError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(SessionError::Fetch(FetchError::Server(status.as_u16())));
        }

        response
            .json::<User>()
            .await
            .map_err(|e| SessionError::Fetch(FetchError::Decode(e.to_string())))
    }
}

/// Deserialize the page records one by one, dropping the ones that do
/// not parse. Server order is preserved.
fn parse_topics(records: Vec<serde_json::Value>) -> Vec<Topic> {
    records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Topic>(record) {
            Ok(topic) => Some(topic),
            Err(e) => {
                tracing::debug!(error = %e, "dropping malformed topic record");
                None
            }
        })
        .collect()
}
