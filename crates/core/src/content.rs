//! Marketing site content: blog posts and admin-edited sections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sections of the site an admin can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSection {
    /// Landing hero banner.
    Hero,
    /// Services overview.
    Services,
    /// About page.
    About,
    /// Testimonials carousel.
    Testimonials,
    /// Contact page.
    Contact,
    /// Blog post.
    Blog,
}

/// A published blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Backend id.
    pub id: String,
    /// Title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Short teaser.
    #[serde(default)]
    pub excerpt: String,
    /// Full body (markdown).
    #[serde(default)]
    pub body: String,
    /// Author display name.
    #[serde(default)]
    pub author: String,
    /// Publication time; unpublished posts have none.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Content draft rejected before publishing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// Title is blank.
    #[error("Title is required")]
    MissingTitle,
    /// Body is blank.
    #[error("Body is required")]
    MissingBody,
    /// The title produced no usable slug.
    #[error("Title must contain at least one letter or digit")]
    EmptySlug,
}

/// An edit made in the admin content editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDraft {
    /// Section being edited.
    pub section: ContentSection,
    /// Title or heading.
    pub title: String,
    /// Body text (markdown).
    pub body: String,
}

/// Body of `POST /api/admin/content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishContentRequest {
    /// Section being edited.
    pub section: ContentSection,
    /// Trimmed title.
    pub title: String,
    /// Slug derived from the title.
    pub slug: String,
    /// Body text.
    pub body: String,
}

impl ContentDraft {
    /// Checks the draft and builds the publish request.
    pub fn to_request(&self) -> Result<PublishContentRequest, ContentError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ContentError::MissingTitle);
        }
        if self.body.trim().is_empty() {
            return Err(ContentError::MissingBody);
        }
        let slug = slugify(title);
        if slug.is_empty() {
            return Err(ContentError::EmptySlug);
        }
        Ok(PublishContentRequest {
            section: self.section,
            title: title.to_string(),
            slug,
            body: self.body.clone(),
        })
    }
}

/// Lowercase ASCII slug with single hyphens between words.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
