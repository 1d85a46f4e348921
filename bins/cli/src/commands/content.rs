use std::path::Path;

use anyhow::Result;
use ledgerdesk_core::content::ContentDraft;

use super::{Context, read_json};

pub async fn blog(ctx: &Context) -> Result<()> {
    let posts = ctx.client()?.list_blog_posts().await?;
    if posts.is_empty() {
        println!("No posts yet");
    }
    for post in &posts {
        let date = post
            .published_at
            .map_or_else(|| "draft".to_string(), |at| at.format("%Y-%m-%d").to_string());
        println!("{date}  {}  ({})", post.title, post.slug);
        if !post.excerpt.is_empty() {
            println!("            {}", post.excerpt);
        }
    }
    Ok(())
}

pub async fn publish(ctx: &Context, file: &Path) -> Result<()> {
    let draft: ContentDraft = read_json(file)?;
    ctx.client()?.publish_content(&draft).await?;
    println!("Published {:?} section \"{}\"", draft.section, draft.title.trim());
    Ok(())
}
