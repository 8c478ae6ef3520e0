//! The signed-in user's token and profile, persisted under `token` and `user`.

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// The stored bearer token, if any. Empty strings count as absent.
pub fn token(store: &dyn KeyValueStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|token| !token.is_empty())
}

/// The stored session. A token without a readable profile is not a session.
pub fn load(store: &dyn KeyValueStore) -> Option<Session> {
    let token = token(store)?;
    let raw_user = store.get(USER_KEY)?;
    match serde_json::from_str::<UserProfile>(&raw_user) {
        Ok(user) => Some(Session { token, user }),
        Err(error) => {
            tracing::warn!("stored user profile is unreadable: {error}");
            None
        }
    }
}

pub fn save(store: &dyn KeyValueStore, session: &Session) {
    match serde_json::to_string(&session.user) {
        Ok(raw_user) => {
            store.set(TOKEN_KEY, &session.token);
            store.set(USER_KEY, &raw_user);
            tracing::info!("session stored for user {}", session.user.id);
        }
        Err(error) => tracing::error!("could not serialize user profile: {error}"),
    }
}

pub fn clear(store: &dyn KeyValueStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
    tracing::info!("session cleared");
}
