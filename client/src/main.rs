//! `vidvest` - command-line front end for the Vidvest API.

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use vidvest_client::utils::{format_compact_count, format_currency, format_signed_percentage, parse_amount};
use vidvest_client::{ApiClient, ApiError, ClientConfig, FileStorage, SessionStore};

#[derive(Parser)]
#[command(name = "vidvest", version, about = "Vidvest account, wallet, and portfolio from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and remember the session
    Login { email: String, password: String },
    /// End the session
    Logout,
    /// Show the signed-in profile
    Whoami,
    /// Portfolio totals and per-creator distribution
    Portfolio,
    /// Wallet balance
    Wallet,
    /// Deposit funds (minimum $10.00)
    Deposit { amount: String },
    /// Withdraw funds (minimum $10.00)
    Withdraw { amount: String },
    /// Find users by username
    Search { username: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = vidvest_client::debug::init(&config.log);

    let storage = Arc::new(FileStorage::new(&config.session_file));
    let session = match SessionStore::restore(storage) {
        Ok(session) => Arc::new(session),
        Err(e) => {
            eprintln!("Could not read saved session: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let api = ApiClient::new(&config, session);

    match run(&api, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, kind = %e.kind, "Command failed");
            eprintln!("Error: {}", e.user_message());
            for (field, messages) in &e.field_errors {
                eprintln!("  {}: {}", field, messages.join("; "));
            }
            if e.is_retryable() {
                eprintln!("Please try again.");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(api: &ApiClient, command: Command) -> Result<(), ApiError> {
    match command {
        Command::Login { email, password } => {
            let auth = api.login(&email, &password).await?;
            println!("Logged in as {}", auth.user.display_name());
        }
        Command::Logout => {
            api.logout().await?;
            println!("Logged out");
        }
        Command::Whoami => {
            let profile = api.get_profile().await?;
            let kind = if profile.is_creator() { "creator" } else { "investor" };
            println!("{} ({}, id {})", profile.display_name(), kind, profile.id);
        }
        Command::Portfolio => {
            let overview = api.get_portfolio_overview().await?;
            println!("Invested:      {}", format_currency(overview.total_invested));
            println!("Current value: {}", format_currency(overview.current_value));
            println!("Return:        {}", format_signed_percentage(overview.return_pct));
            println!("Investments:   {}", format_compact_count(overview.investment_count));
            for creator in &overview.by_creator {
                println!(
                    "  {:<20} {:>12} {:>7.2}%",
                    creator.creator.as_deref().unwrap_or("unknown"),
                    format_currency(creator.total_invested),
                    creator.percentage
                );
            }
        }
        Command::Wallet => {
            let wallet = api.get_wallet().await?;
            println!("Balance: {}", format_currency(wallet.balance));
        }
        Command::Deposit { amount } => {
            let receipt = api.deposit_funds(parse_amount(&amount)?).await?;
            println!(
                "Deposited {} (fee {}, net {}). New balance: {}",
                format_currency(receipt.amount),
                format_currency(receipt.fee),
                format_currency(receipt.net_amount),
                format_currency(receipt.new_balance)
            );
        }
        Command::Withdraw { amount } => {
            let receipt = api.withdraw_funds(parse_amount(&amount)?).await?;
            println!(
                "Withdrew {} (fee {}, net {}). New balance: {}",
                format_currency(receipt.amount),
                format_currency(receipt.fee),
                format_currency(receipt.net_amount),
                format_currency(receipt.new_balance)
            );
        }
        Command::Search { username } => {
            let users = api.search_users(&username).await?;
            if users.is_empty() {
                println!("No users found");
            }
            for user in users {
                println!("{} (@{})", user.display_name(), user.username.as_deref().unwrap_or("-"));
            }
        }
    }
    Ok(())
}
