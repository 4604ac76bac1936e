//! REST helpers for the map, news, and cat endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, reverse-proxied
//! to the backend in development. Server-side (SSR) and host tests: stubs
//! returning `ApiError::Transport`, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function returns `Result<_, ApiError>`; callers log failures and
//! keep the last-known-good state. There are no retries, and in-flight
//! requests are not cancelled — a rapid re-trigger can land a stale
//! response after a newer one (last-write-wins, by current design).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use diagram::map::MetroMap;

use super::error::ApiError;
use super::types::{Article, CatPayload};
#[cfg(feature = "hydrate")]
use super::types::{ArticlesEnvelope, CatEnvelope, MapEnvelope, MapModelEnvelope, MapUpdateBody};

/// Read/write endpoint for the metro map.
pub const MAP_ENDPOINT: &str = "/metro-map/map";

/// List endpoint for news articles.
pub const ARTICLES_ENDPOINT: &str = "/news/articles";

/// Header carrying the conversation thread id on map requests.
pub const THREAD_HEADER: &str = "X-Thread-Id";

#[cfg(any(test, feature = "hydrate"))]
fn article_endpoint(article_id: &str) -> String {
    format!("{ARTICLES_ENDPOINT}/{article_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn cat_endpoint(thread_id: &str) -> String {
    format!("/cat/cat?thread_id={thread_id}")
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Network { status, body }
}

/// Fetch the current metro map via `GET /metro-map/map`, optionally scoped
/// to a conversation thread, and convert it into the id-keyed client model.
///
/// # Errors
///
/// `Network` on a non-2xx status, `MalformedResponse` when the `map` field
/// is absent, `Transport` otherwise.
pub async fn fetch_map(thread_id: Option<&str>) -> Result<MetroMap, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(MAP_ENDPOINT);
        if let Some(thread_id) = thread_id {
            request = request.header(THREAD_HEADER, thread_id);
        }
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let envelope: MapEnvelope = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let payload = envelope.map.ok_or(ApiError::MalformedResponse("map"))?;
        Ok(payload.into_model())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = thread_id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Replace the metro map wholesale via `POST /metro-map/map` and return
/// the server's echoed map as new truth.
///
/// No optimistic update happens here: the store is only swapped once this
/// round trip completes.
///
/// # Errors
///
/// Same kinds as [`fetch_map`]; the `Network` variant carries the raw
/// response body for diagnosability.
pub async fn update_map(map: &MetroMap, thread_id: Option<&str>) -> Result<MetroMap, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::post(MAP_ENDPOINT);
        if let Some(thread_id) = thread_id {
            request = request.header(THREAD_HEADER, thread_id);
        }
        let resp = request
            .json(&MapUpdateBody { map })
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let envelope: MapModelEnvelope = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        envelope.map.ok_or(ApiError::MalformedResponse("map"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (map, thread_id);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the article list via `GET /news/articles`.
///
/// # Errors
///
/// `Network`, `MalformedResponse`, or `Transport` as for [`fetch_map`].
pub async fn fetch_articles() -> Result<Vec<Article>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(ARTICLES_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let envelope: ArticlesEnvelope = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(envelope.articles)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch a single article with full content via `GET /news/articles/:id`.
///
/// # Errors
///
/// `Network` (404 included), or `Transport`.
pub async fn fetch_article(article_id: &str) -> Result<Article, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&article_endpoint(article_id))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        resp.json().await.map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = article_id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the cat snapshot for a thread via `GET /cat/cat?thread_id=...`.
///
/// A missing thread id resets to the hardcoded initial cat without any
/// network call, mirroring the backend's initial context.
///
/// # Errors
///
/// `Network`, `MalformedResponse`, or `Transport` once a thread id exists.
pub async fn fetch_cat(thread_id: Option<&str>) -> Result<CatPayload, ApiError> {
    let Some(thread_id) = thread_id else {
        return Ok(CatPayload::initial());
    };
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&cat_endpoint(thread_id))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(error_from_response(resp).await);
        }
        let envelope: CatEnvelope = resp
            .json()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        envelope.cat.ok_or(ApiError::MalformedResponse("cat"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = thread_id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
