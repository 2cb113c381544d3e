pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::session::{SessionService, User};
pub use domain::topic::{
    FetchError, LoadState, Topic, TopicFilter, TopicListLoader, TopicListPresenter, TopicQuery,
    PAGE_SIZE,
};
pub use error::{ClientError, ClientResult};
pub use infrastructure::gateways::{ForumHttpClient, SessionGateway, TopicGateway};
