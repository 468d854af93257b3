//! REST API client for the PitchSide backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! All operations return `Result<_, String>` so callers can degrade to an
//! empty or unchanged view without panics. Whether a failure is surfaced or
//! swallowed is the caller's call; the comment panel, for instance, logs
//! fetch failures and renders an empty thread.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AgentConfig, Article, Comment, MediaSections, NewComment};
#[cfg(feature = "hydrate")]
use super::types::{AgentEnvelope, AgentsResponse, ArticleEnvelope, CommentEnvelope, CommentsResponse};

/// Compile-time backend origin override. Empty means same-origin paths.
const BASE_URL_OVERRIDE: Option<&str> = option_env!("PITCHSIDE_API_ORIGIN");

#[cfg(not(feature = "hydrate"))]
const SERVER_STUB: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// REST client carrying the backend origin as an explicit construction value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Build a client from the compile-time origin override, falling back to
    /// same-origin relative paths.
    pub fn from_env() -> Self {
        Self::new(BASE_URL_OVERRIDE.unwrap_or_default())
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn comments_endpoint(&self, article_id: i64, comment_type: &str) -> String {
        format!(
            "{}/api/articles/{article_id}/comments?comment_type={comment_type}",
            self.base_url
        )
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn post_comment_endpoint(&self, article_id: i64) -> String {
        format!("{}/api/articles/{article_id}/comments", self.base_url)
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn article_endpoint(&self, article_id: i64) -> String {
        format!("{}/api/articles/{article_id}", self.base_url)
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn featured_endpoint(&self) -> String {
        format!("{}/api/media/featured", self.base_url)
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn agents_endpoint(&self) -> String {
        format!("{}/api/agents", self.base_url)
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn agent_endpoint(&self, name: &str) -> String {
        format!("{}/api/agents/{name}", self.base_url)
    }

    /// Fetch the comment thread for one article and comment category.
    ///
    /// # Errors
    ///
    /// Returns an error string if the HTTP request fails or the server
    /// responds with a non-OK status.
    pub async fn fetch_comments(&self, article_id: i64, comment_type: &str) -> Result<Vec<Comment>, String> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.comments_endpoint(article_id, comment_type);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("comments", resp.status()));
            }
            let body: CommentsResponse = resp.json().await.map_err(|e| e.to_string())?;
            Ok(body.comments)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (article_id, comment_type);
            Err(SERVER_STUB.to_owned())
        }
    }

    /// Create a comment and return the server-owned record.
    ///
    /// # Errors
    ///
    /// Returns an error string if the HTTP request fails or the server
    /// rejects the comment.
    pub async fn post_comment(&self, comment: &NewComment) -> Result<Comment, String> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.post_comment_endpoint(comment.article_id);
            let resp = gloo_net::http::Request::post(&url)
                .json(comment)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("comment post", resp.status()));
            }
            let body: CommentEnvelope = resp.json().await.map_err(|e| e.to_string())?;
            Ok(body.comment)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = comment;
            Err(SERVER_STUB.to_owned())
        }
    }

    /// Fetch one article or video detail record.
    ///
    /// # Errors
    ///
    /// Returns an error string if the HTTP request fails or the article does
    /// not exist.
    pub async fn fetch_article(&self, article_id: i64) -> Result<Article, String> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.article_endpoint(article_id);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("article", resp.status()));
            }
            let body: ArticleEnvelope = resp.json().await.map_err(|e| e.to_string())?;
            Ok(body.article)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = article_id;
            Err(SERVER_STUB.to_owned())
        }
    }

    /// Fetch the featured-media sections for the home gallery.
    ///
    /// # Errors
    ///
    /// Returns an error string if the HTTP request fails or the server
    /// responds with a non-OK status.
    pub async fn fetch_featured(&self) -> Result<MediaSections, String> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.featured_endpoint();
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("featured media", resp.status()));
            }
            resp.json::<MediaSections>().await.map_err(|e| e.to_string())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SERVER_STUB.to_owned())
        }
    }

    /// Fetch the configured scraping agents for the admin screen.
    ///
    /// # Errors
    ///
    /// Returns an error string if the HTTP request fails or the server
    /// responds with a non-OK status.
    pub async fn fetch_agents(&self) -> Result<Vec<AgentConfig>, String> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.agents_endpoint();
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("agents", resp.status()));
            }
            let body: AgentsResponse = resp.json().await.map_err(|e| e.to_string())?;
            Ok(body.agents)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(SERVER_STUB.to_owned())
        }
    }

    /// Persist an agent record: `POST` for a new agent, `PUT` keyed by the
    /// record's pre-edit name for an update.
    ///
    /// # Errors
    ///
    /// Returns an error string if the HTTP request fails or the server
    /// rejects the record.
    pub async fn save_agent(&self, agent: &AgentConfig, original_name: Option<&str>) -> Result<AgentConfig, String> {
        #[cfg(feature = "hydrate")]
        {
            let request = match original_name {
                Some(name) => gloo_net::http::Request::put(&self.agent_endpoint(name)),
                None => gloo_net::http::Request::post(&self.agents_endpoint()),
            };
            let resp = request
                .json(agent)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(request_failed_message("agent save", resp.status()));
            }
            let body: AgentEnvelope = resp.json().await.map_err(|e| e.to_string())?;
            Ok(body.agent)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (agent, original_name);
            Err(SERVER_STUB.to_owned())
        }
    }
}
