use anyhow::{Context as _, Result};
use ledgerdesk_shared::Session;
use tracing::info;

use super::Context;

pub async fn login(ctx: &Context, email: &str, password: &str) -> Result<()> {
    // Log in from a clean slate so a stale token is never sent along.
    let mut client = ctx.client()?;
    client.set_session(Session::anonymous());

    let login = client.login(email, password).await?;
    ctx.store()
        .save(&login.session)
        .with_context(|| format!("failed to write {}", ctx.store().path().display()))?;
    info!(path = %ctx.store().path().display(), "session saved");

    let name = login
        .user
        .as_ref()
        .and_then(|u| u.name.as_deref())
        .unwrap_or(email);
    println!("Logged in as {name}");
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<()> {
    ctx.store()
        .clear()
        .with_context(|| format!("failed to remove {}", ctx.store().path().display()))?;
    println!("Logged out");
    Ok(())
}
