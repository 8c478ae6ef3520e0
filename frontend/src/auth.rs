//! Signing in, signing up and signing out.

use serde::Serialize;
use yew::Callback;

use crate::{
    error::ApiError,
    http::{ApiClient, Transport},
    models::{session, Session, UserProfile},
    navigation::{Navigator, LOGIN_PATH, REGISTER_PATH},
    storage::KeyValueStore,
};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// What the dashboard gets from the signed-in shell.
#[derive(Clone, PartialEq)]
pub struct AuthContext {
    pub user: Option<UserProfile>,
    pub logout: Callback<()>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn endpoint(&self) -> &'static str {
        match self {
            AuthMode::Login => LOGIN_ENDPOINT,
            AuthMode::Register => REGISTER_ENDPOINT,
        }
    }

    /// The page for this mode.
    pub fn page(&self) -> &'static str {
        match self {
            AuthMode::Login => LOGIN_PATH,
            AuthMode::Register => REGISTER_PATH,
        }
    }

    pub fn fallback_error(&self) -> &'static str {
        match self {
            AuthMode::Login => "Login failed",
            AuthMode::Register => "Registration failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email and password are required")]
    Missing,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// The fields of the login/registration form. `name` is ignored for login.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self, mode: AuthMode) -> Result<(), CredentialsError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(CredentialsError::Missing);
        }
        if mode == AuthMode::Register {
            if self.name.trim().is_empty() {
                return Err(CredentialsError::NameRequired);
            }
            if self.password.chars().count() < MIN_PASSWORD_LENGTH {
                return Err(CredentialsError::PasswordTooShort);
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Sends the credentials for `mode` and stores the returned session.
pub async fn authenticate<T: Transport>(
    client: &ApiClient<T>,
    mode: AuthMode,
    credentials: &Credentials,
) -> Result<Session, ApiError> {
    let email = credentials.email.trim();
    let session: Session = match mode {
        AuthMode::Login => {
            let body = LoginRequest {
                email,
                password: &credentials.password,
            };
            client.post(mode.endpoint(), &body).await?
        }
        AuthMode::Register => {
            let body = RegisterRequest {
                name: credentials.name.trim(),
                email,
                password: &credentials.password,
            };
            client.post(mode.endpoint(), &body).await?
        }
    };

    session::save(client.store(), &session);
    Ok(session)
}

pub fn logout(store: &dyn KeyValueStore, navigator: &dyn Navigator) {
    session::clear(store);
    navigator.redirect(LOGIN_PATH);
}
