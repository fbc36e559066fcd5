use thiserror::Error;

use crate::entities::SessionUser;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    Credentials,
    #[error("The user already exists")]
    UserExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The external authentication/session provider.
pub trait AuthGateway {
    fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, AuthError>;
    fn sign_up(&self, email: &str, password: &str) -> Result<SessionUser, AuthError>;
    fn sign_out(&self);
}
