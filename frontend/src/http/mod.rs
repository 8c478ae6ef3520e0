//! The pre-configured API client.
//!
//! Every request goes through the same pipeline: default headers, bearer
//! token from storage, dispatch through a [Transport], then response checks
//! that turn non-2xx statuses into [ApiError]s and end the session on 401.

mod interceptors;
mod transport;

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::AppConfig,
    error::ApiError,
    navigation::{BrowserNavigator, Navigator},
    storage::{KeyValueStore, LocalStorage},
};

pub use transport::{ApiRequest, ApiResponse, FetchTransport, Transport};
#[cfg(test)]
pub use transport::Method;

pub struct ApiClient<T = FetchTransport> {
    config: AppConfig,
    transport: T,
    store: Rc<dyn KeyValueStore>,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient<FetchTransport> {
    /// A client backed by `fetch`, local storage and `window.location`.
    pub fn browser(config: AppConfig) -> Self {
        Self::new(
            config,
            FetchTransport,
            Rc::new(LocalStorage),
            Rc::new(BrowserNavigator),
        )
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(
        config: AppConfig,
        transport: T,
        store: Rc<dyn KeyValueStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            transport,
            store,
            navigator,
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.send(ApiRequest::get(path)).await?.json()
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        self.send(ApiRequest::post(path).json(body)?).await?.json()
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        self.send(ApiRequest::put(path).json(body)?).await?.json()
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.send(ApiRequest::delete(path)).await
    }

    /// Sends an arbitrary request through the full interceptor pipeline.
    pub async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        interceptors::apply_default_headers(&mut request);
        interceptors::attach_bearer_token(&mut request, self.store());

        let url = self.config.url_for(&request.path);
        tracing::debug!("{} {url}", request.method);

        let response = self
            .transport
            .send(&url, &request)
            .await
            .inspect_err(|error| tracing::error!("{} {url} failed: {error}", request.method))?;

        interceptors::check_response(&request, response, self.store(), self.navigator())
    }
}
