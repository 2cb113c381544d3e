pub mod error;
pub mod model;
pub mod service;

pub use error::SessionError;
pub use model::User;
pub use service::SessionService;
