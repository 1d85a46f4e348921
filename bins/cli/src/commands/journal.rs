use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use ledgerdesk_client::{ClientError, JournalEntryController, PortalClient};
use ledgerdesk_core::accounts::AccountDirectory;
use ledgerdesk_core::journal::{
    JournalDraft, JournalEntryEditor, JournalEntryForm, StatusBanner, ValidationReport,
    format_amount,
};
use ledgerdesk_core::load_state::LoadState;
use tracing::warn;

use super::{Context, read_json};

pub async fn journal_check(ctx: &Context, file: &Path) -> Result<()> {
    let client = ctx.client()?;
    let form = load_form(&client, file).await?;
    print_form(&form);

    let report = form.validate();
    if report.is_valid() {
        println!("Entry is valid and ready to submit");
        return Ok(());
    }
    print_report(&report);
    bail!("journal entry has {} problem(s)", report.len())
}

pub async fn journal_submit(ctx: &Context, file: &Path, attachments: &[PathBuf]) -> Result<()> {
    let client = ctx.client()?;
    let form = load_form(&client, file).await?;

    let editor = JournalEntryEditor::with_form(form);
    let mut controller = JournalEntryController::with_editor(client, ctx.upload_policy(), editor);

    for path in attachments {
        let result = controller.attach(path).await;
        print_banner(controller.editor().banner());
        result?;
    }

    if let Err(err) = controller.submit().await {
        if let Some(report) = err_report(&err) {
            print_report(report);
        } else {
            print_banner(controller.editor().banner());
        }
        return Err(err.into());
    }
    print_banner(controller.editor().banner());
    Ok(())
}

/// Reads a draft and replays it into a form, auto-filling account titles.
async fn load_form(client: &PortalClient, file: &Path) -> Result<JournalEntryForm> {
    let draft: JournalDraft = read_json(file)?;

    let accounts =
        LoadState::from_result(client.list_accounts().await.map_err(|e| e.user_message()));
    if let Some(message) = accounts.error() {
        warn!(%message, "chart of accounts unavailable, account titles will not be filled in");
    }
    let directory = AccountDirectory::new(accounts.loaded().cloned().unwrap_or_default());

    Ok(draft.into_form(&directory)?)
}

fn err_report(err: &ClientError) -> Option<&ValidationReport> {
    match err {
        ClientError::Journal(journal) => journal.report(),
        _ => None,
    }
}

fn print_form(form: &JournalEntryForm) {
    println!(
        "{} {} {}",
        form.date(),
        form.transaction_no().unwrap_or("-"),
        form.description()
    );
    for line in form.lines() {
        println!(
            "{:>3} {:<8} {:<24} {:>12} {:>12}",
            line.line_no,
            line.account_no,
            line.account_title,
            line.debit,
            line.credit
        );
    }
    let totals = form.totals();
    println!(
        "    Totals: debit {} credit {} ({})",
        format_amount(totals.debit),
        format_amount(totals.credit),
        if totals.is_balanced { "balanced" } else { "not balanced" }
    );
}

fn print_report(report: &ValidationReport) {
    for error in report.errors() {
        println!("  - {}", error.message);
    }
}

fn print_banner(banner: Option<&StatusBanner>) {
    if let Some(banner) = banner {
        if banner.is_error() {
            println!("error: {}", banner.message);
        } else {
            println!("{}", banner.message);
        }
    }
}
