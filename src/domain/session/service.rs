use super::error::SessionError;
use super::model::User;
use crate::infrastructure::gateways::SessionGateway;
use parking_lot::Mutex;
use std::sync::Arc;

/// Holds the current sign-in state. Credential collection (shared web
/// credentials, sign-in sheet) stays outside; this only runs the
/// session exchange and remembers who is signed in.
pub struct SessionService {
    gateway: Arc<dyn SessionGateway>,
    current_user: Mutex<Option<User>>,
}

impl SessionService {
    pub fn new(gateway: Arc<dyn SessionGateway>) -> Self {
        Self {
            gateway,
            current_user: Mutex::new(None),
        }
    }

    pub async fn sign_in(&self, username: &str, password: &str) -> Result<User, SessionError> {
        let user = self.gateway.sign_in(username, password).await?;
        tracing::info!(user = %user.login, "signed in");
        *self.current_user.lock() = Some(user.clone());
        Ok(user)
    }

    pub fn sign_out(&self) {
        *self.current_user.lock() = None;
    }

    pub fn current_user(&self) -> Option<User> {
        self.current_user.lock().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current_user.lock().is_some()
    }
}
