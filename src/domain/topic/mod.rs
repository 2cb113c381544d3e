pub mod error;
pub mod loader;
pub mod model;

pub use error::FetchError;
pub use loader::{TopicListLoader, TopicListPresenter, PAGE_SIZE};
pub use model::{LoadState, Topic, TopicAuthor, TopicFilter, TopicQuery};
