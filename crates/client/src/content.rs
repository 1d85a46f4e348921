//! Blog listing and admin content publishing.

use ledgerdesk_core::content::{BlogPost, ContentDraft};
use reqwest::Method;
use serde::Deserialize;
use tracing::info;

use crate::client::{PortalClient, send_json, send_unit};
use crate::error::ClientResult;

#[derive(Deserialize)]
struct BlogResponse {
    #[serde(default)]
    posts: Vec<BlogPost>,
}

impl PortalClient {
    /// `GET /api/blog`.
    pub async fn list_blog_posts(&self) -> ClientResult<Vec<BlogPost>> {
        let builder = self.request(Method::GET, "/api/blog");
        let response: BlogResponse = send_json(builder, "Failed to load blog posts").await?;
        Ok(response.posts)
    }

    /// `POST /api/admin/content`. Requires a logged-in session.
    ///
    /// The draft is checked locally before anything is sent.
    pub async fn publish_content(&self, draft: &ContentDraft) -> ClientResult<()> {
        let request = draft.to_request()?;
        let builder = self
            .authenticated(Method::POST, "/api/admin/content")?
            .json(&request);
        send_unit(builder, "Failed to publish content").await?;
        info!(section = ?request.section, slug = %request.slug, "content published");
        Ok(())
    }
}
