use anyhow::Result;
use ledgerdesk_core::dashboard::DashboardService;
use ledgerdesk_core::journal::format_amount;
use ledgerdesk_core::load_state::LoadState;

use super::Context;

pub async fn accounts(ctx: &Context) -> Result<()> {
    let accounts = ctx.client()?.list_accounts().await?;
    if accounts.is_empty() {
        println!("No accounts");
        return Ok(());
    }
    for account in &accounts {
        let kind = account.account_type.as_deref().unwrap_or("-");
        println!("{:<8} {:<40} {kind}", account.account_number, account.account_name);
    }
    Ok(())
}

pub async fn summary(ctx: &Context, account: Option<&str>) -> Result<()> {
    let dashboard = ctx.client()?.load_dashboard().await;

    println!("== Financial summary ==");
    match &dashboard.summary {
        LoadState::Loaded(summary) => {
            println!("Revenue      {:>14}", format_amount(summary.revenue));
            println!("Expenses     {:>14}", format_amount(summary.expenses));
            println!("Net income   {:>14}", format_amount(summary.net_income));
            println!("Cash balance {:>14}", format_amount(summary.cash_balance));
            if let Some(margin) = DashboardService::profit_margin(summary) {
                println!("Profit margin {margin:>12}%");
            }
        }
        other => print_unavailable(other),
    }

    println!();
    println!("== Cash flow ==");
    match &dashboard.cash_flow {
        LoadState::Loaded(points) => {
            let cumulative = DashboardService::cumulative_net(points);
            for (point, total) in points.iter().zip(cumulative) {
                println!(
                    "{:<10} in {:>12}  out {:>12}  net {:>12}  cumulative {:>12}",
                    point.period,
                    format_amount(point.inflow),
                    format_amount(point.outflow),
                    format_amount(point.net()),
                    format_amount(total),
                );
            }
        }
        other => print_unavailable(other),
    }

    println!();
    println!("== General ledger ==");
    match &dashboard.ledger {
        LoadState::Loaded(rows) => {
            let rows: Vec<_> = match account {
                Some(account) => DashboardService::filter_by_account(rows, account)
                    .into_iter()
                    .cloned()
                    .collect(),
                None => rows.clone(),
            };
            for entry in DashboardService::running_balances(&rows) {
                let row = &entry.row;
                println!(
                    "{} {:<8} {:<24} {:>12} {:>12} {:>12}",
                    row.date,
                    row.account_no,
                    row.account_title,
                    format_amount(row.debit),
                    format_amount(row.credit),
                    format_amount(entry.balance),
                );
            }
        }
        other => print_unavailable(other),
    }
    Ok(())
}

fn print_unavailable<T>(state: &LoadState<T>) {
    match state.error() {
        Some(message) => println!("unavailable: {message}"),
        None => println!("loading..."),
    }
}
