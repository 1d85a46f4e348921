use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use ledgerdesk_shared::AppConfig;

use crate::commands::{self, Context};

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "ledgerdesk")]
#[command(about = "Client portal for the Ledgerdesk accounting service")]
#[command(version)]
pub struct Cli {
    /// Backend base URL, overriding `api.base_url` from configuration
    #[arg(long, global = true, env = "LEDGERDESK_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and keep the session token for later commands
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long, env = "LEDGERDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the saved session token
    Logout,
    /// List the chart of accounts
    Accounts,
    /// Show the financial summary, cash flow, and general ledger
    Summary {
        /// Only show ledger rows for this account number
        #[arg(short, long)]
        account: Option<String>,
    },
    /// Check or submit manual journal entries
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },
    /// Submit a consultation request from a JSON file
    Consultation {
        /// Path to the request JSON
        file: PathBuf,
    },
    /// Submit a financial health checklist from a JSON file
    Checklist {
        /// Path to the checklist JSON
        file: PathBuf,
    },
    /// List published blog posts
    Blog,
    /// Publish a site content draft from a JSON file (admin)
    Publish {
        /// Path to the draft JSON
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum JournalAction {
    /// Show totals and validation problems without sending anything
    Check {
        /// Path to the journal draft JSON
        file: PathBuf,
    },
    /// Upload attachments, then create the entry
    ///
    /// Attachments are uploaded in order before the entry is submitted and
    /// their names travel with it as supporting documents.
    Submit {
        /// Path to the journal draft JSON
        file: PathBuf,

        /// Supporting document to upload first (repeatable)
        #[arg(short, long = "attach")]
        attachments: Vec<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = AppConfig::load().context("failed to load configuration")?;
        if let Some(api_url) = self.api_url {
            config.api.base_url = api_url;
        }
        let ctx = Context::new(config);

        match self.command {
            Commands::Login { email, password } => commands::login(&ctx, &email, &password).await,
            Commands::Logout => commands::logout(&ctx),
            Commands::Accounts => commands::accounts(&ctx).await,
            Commands::Summary { account } => commands::summary(&ctx, account.as_deref()).await,
            Commands::Journal { action } => match action {
                JournalAction::Check { file } => commands::journal_check(&ctx, &file).await,
                JournalAction::Submit { file, attachments } => {
                    commands::journal_submit(&ctx, &file, &attachments).await
                }
            },
            Commands::Consultation { file } => commands::consultation(&ctx, &file).await,
            Commands::Checklist { file } => commands::checklist(&ctx, &file).await,
            Commands::Blog => commands::blog(&ctx).await,
            Commands::Publish { file } => commands::publish(&ctx, &file).await,
        }
    }
}
