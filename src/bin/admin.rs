//! CLI administration tool for credit-card-api.
//!
//! Inspects and maintains the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Record counts
//! cargo run --bin admin -- stats
//!
//! # List customers with their cards
//! cargo run --bin admin -- customer list
//!
//! # Delete a customer and its cards
//! cargo run --bin admin -- customer delete 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server (`DATABASE_URL` or `DB_*`).

use credit_card_api::application::services::{CreditCardService, CustomerService};
use credit_card_api::config::{Config, mask_connection_string};
use credit_card_api::infrastructure::persistence::{PgCreditCardRepository, PgCustomerRepository};
use credit_card_api::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing credit-card-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show record counts
    Stats,

    /// Manage customers
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Customer subcommands.
#[derive(Subcommand)]
enum CustomerAction {
    /// List customers and their cards
    List,

    /// Delete a customer together with all of its cards
    Delete {
        /// Customer id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

type AdminCustomerService = CustomerService<PgCustomerRepository>;
type AdminCardService = CreditCardService<PgCreditCardRepository, PgCustomerRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Customer { action } => handle_customer_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

fn customer_service(pool: &PgPool) -> AdminCustomerService {
    let repository = PgCustomerRepository::new(Arc::new(pool.clone()));

    CustomerService::new(Arc::new(repository))
}

fn card_service(pool: &PgPool) -> AdminCardService {
    let pool = Arc::new(pool.clone());

    CreditCardService::new(
        Arc::new(PgCreditCardRepository::new(pool.clone())),
        Arc::new(PgCustomerRepository::new(pool)),
    )
}

/// Displays customer and card counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let customers = customer_service(pool);
    let cards = card_service(pool);

    let customers_count = customers
        .count_customers()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count customers: {}", e))?;
    let cards_count = cards
        .count_credit_cards()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count credit cards: {}", e))?;

    println!(
        "  Customers:    {}",
        customers_count.to_string().bright_green().bold()
    );
    println!(
        "  Credit cards: {}",
        cards_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Dispatches customer commands.
async fn handle_customer_action(action: CustomerAction, pool: &PgPool) -> Result<()> {
    let customers = customer_service(pool);

    match action {
        CustomerAction::List => list_customers(&customers).await?,
        CustomerAction::Delete { id, yes } => delete_customer(&customers, id, yes).await?,
    }

    Ok(())
}

/// Prints every customer followed by its cards.
///
/// Card numbers are masked to their last four digits.
async fn list_customers(service: &AdminCustomerService) -> Result<()> {
    println!("{}", "📋 Customers".bright_blue().bold());
    println!();

    let customers = service
        .list_customers()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list customers: {}", e))?;

    if customers.is_empty() {
        println!("{}", "  No customers found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<30} {:<35} {:<6}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Cards".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for customer in &customers {
        println!(
            "  {:<6} {:<30} {:<35} {}",
            customer.id.to_string().bright_black(),
            customer.full_name().cyan(),
            customer.email,
            customer.credit_cards.len()
        );

        for card in &customer.credit_cards {
            println!(
                "         {} {:<8} exp {}  limit {:.2}  balance {:.2}",
                mask_card_number(&card.card_number).bright_black(),
                card.card_type,
                card.expiration_date,
                card.credit_limit,
                card.current_balance
            );
        }
    }

    println!();
    println!(
        "  Total: {}",
        customers.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a customer after confirmation. Cards go with it.
async fn delete_customer(service: &AdminCustomerService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Customer".bright_blue().bold());
    println!();

    let customer = service
        .get_customer(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Customer not found")?;

    println!("  Customer: {}", customer.full_name().cyan());
    println!("  Email:    {}", customer.email);
    println!(
        "  Cards:    {}",
        customer.credit_cards.len().to_string().yellow()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this customer and all of its cards?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = service
        .delete_customer(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete customer: {}", e))?;

    if deleted {
        println!("{}", "✅ Customer deleted".green().bold());
    } else {
        println!("{}", "⚠️  Customer was already gone".yellow());
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!(
                "  URL:        {}",
                mask_connection_string(&config.database_url).bright_white()
            );
            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

/// Replaces all but the last four characters with `*`.
fn mask_card_number(number: &str) -> String {
    let count = number.chars().count();
    number
        .chars()
        .enumerate()
        .map(|(i, c)| if i + 4 < count { '*' } else { c })
        .collect()
}
