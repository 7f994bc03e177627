//! REST client for the remote books collection.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! collection is only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode is an [`ApiError`]. Callers treat them all as one
//! "request failed" outcome; the variants only exist so the log line says
//! what went wrong.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Book, BookDraft};

/// Failure of a single request against the collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("request failed: {0}")]
    Network(String),
    /// The collaborator answered with a non-success status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// A request or response body could not be (de)serialized.
    #[error("malformed payload: {0}")]
    Payload(String),
    /// HTTP was attempted outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// The remote collection resource: list, create, update, delete.
///
/// Futures are `?Send`; the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait BooksApi {
    /// `GET /api/books`, in collaborator order.
    async fn list(&self) -> Result<Vec<Book>, ApiError>;

    /// `POST /api/books` with the draft as the JSON body.
    async fn create(&self, draft: &BookDraft) -> Result<(), ApiError>;

    /// `PUT /api/books/{id}` with the draft as the JSON body.
    async fn update(&self, id: &str, draft: &BookDraft) -> Result<(), ApiError>;

    /// `DELETE /api/books/{id}`. The response body is ignored.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// `gloo-net` implementation of [`BooksApi`] rooted at a base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBooksApi {
    base_url: String,
}

impl HttpBooksApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Client for the build-time configured collaborator.
    pub fn from_config() -> Self {
        Self::new(crate::config::api_base_url())
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn collection_url(&self) -> String {
        books_collection_url(&self.base_url)
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn item_url(&self, id: &str) -> String {
        book_item_url(&self.base_url, id)
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn books_collection_url(base_url: &str) -> String {
    format!("{base_url}/api/books")
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn book_item_url(base_url: &str, id: &str) -> String {
    format!("{base_url}/api/books/{id}")
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(e) => ApiError::Payload(e.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}

#[cfg(feature = "hydrate")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(ApiError::Status(resp.status())) }
}

#[async_trait(?Send)]
impl BooksApi for HttpBooksApi {
    async fn list(&self) -> Result<Vec<Book>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.collection_url())
                .send()
                .await
                .map_err(network_error)?;
            check_status(&resp)?;
            resp.json::<Vec<Book>>().await.map_err(|e| ApiError::Payload(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn create(&self, draft: &BookDraft) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.collection_url())
                .json(draft)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            check_status(&resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn update(&self, id: &str, draft: &BookDraft) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&self.item_url(id))
                .json(draft)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            check_status(&resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&self.item_url(id))
                .send()
                .await
                .map_err(network_error)?;
            check_status(&resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
