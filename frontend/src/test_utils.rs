//! In-memory stand-ins for the browser collaborators.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
};

use crate::{
    config::AppConfig,
    dialogs::Dialogs,
    error::ApiError,
    http::{ApiClient, ApiRequest, ApiResponse, Transport},
    models::session::{TOKEN_KEY, USER_KEY},
    navigation::Navigator,
    storage::KeyValueStore,
};

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        for (key, value) in items {
            store.set(key, value);
        }
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// A store holding the token `test-token` and a profile for "Test User".
pub fn signed_in_store() -> MemoryStore {
    MemoryStore::with_items([
        (TOKEN_KEY, "test-token"),
        (USER_KEY, r#"{"id":"u1","name":"Test User"}"#),
    ])
}

/// Records redirects instead of performing them. The current path follows
/// the last redirect.
#[derive(Debug)]
pub struct RecordingNavigator {
    path: RefCell<String>,
    redirects: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: &str) -> Self {
        Self {
            path: RefCell::new(path.to_owned()),
            redirects: RefCell::new(Vec::new()),
        }
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_owned());
        *self.path.borrow_mut() = path.to_owned();
    }
}

/// Answers confirms from a queue, declining once it runs dry, and records
/// every prompt shown.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    answers: RefCell<VecDeque<bool>>,
    confirms: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_owned());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }
}

#[derive(Default)]
struct MockState {
    responses: VecDeque<Result<ApiResponse, ApiError>>,
    requests: Vec<(String, ApiRequest)>,
}

/// Replays scripted responses in order and records what was sent.
/// Clones share the same script, so a test can keep one and hand the other
/// to an [ApiClient].
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.state
            .borrow_mut()
            .responses
            .push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn fail(&self, error: ApiError) {
        self.state.borrow_mut().responses.push_back(Err(error));
    }

    /// `(absolute url, request)` pairs in the order they were sent.
    pub fn requests(&self) -> Vec<(String, ApiRequest)> {
        self.state.borrow().requests.clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut state = self.state.borrow_mut();
        state.requests.push((url.to_owned(), request.clone()));
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response scripted".to_owned())))
    }
}

/// Builds a client over `transport` with the default config, returning
/// handles to its store and navigator for assertions.
pub fn client_with(
    transport: &MockTransport,
    store: MemoryStore,
    current_path: &str,
) -> (
    ApiClient<MockTransport>,
    Rc<MemoryStore>,
    Rc<RecordingNavigator>,
) {
    let store = Rc::new(store);
    let navigator = Rc::new(RecordingNavigator::at(current_path));
    let client = ApiClient::new(
        AppConfig::default(),
        transport.clone(),
        store.clone(),
        navigator.clone(),
    );

    (client, store, navigator)
}
