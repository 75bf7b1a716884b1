//! Stockdesk - warehouse stock console
//!
//! A terminal frontend for the inventory REST backend: stock receiving with
//! blended-price previews, batch ledgers, damage reports, history, manual
//! adjustments, and department statistics.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockdesk_console::api::ApiClient;
use stockdesk_console::commands;
use stockdesk_console::services::{
    AdjustmentService, BatchReceiveForm, DamageService, HistoryService, LedgerService,
    ReceiveForm, ReceivingService, StatsService,
};
use stockdesk_console::Config;

#[derive(Parser)]
#[command(name = "stockdesk")]
#[command(author, version, about = "Warehouse stock console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List inventory items with stock levels
    Items,
    /// Receive stock, previewing the blended unit price first
    Receive {
        #[arg(long)]
        name: String,
        #[arg(long)]
        quantity: i64,
        #[arg(long)]
        price: Decimal,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        supplier: Option<String>,
        #[arg(long)]
        min_stock: Option<i64>,
        #[arg(long)]
        max_stock: Option<i64>,
        /// Post the intake; omitted means dry run
        #[arg(long)]
        submit: bool,
    },
    /// Receive stock as tracked batches (repeat --batch QTY:PRICE[:EXPIRY])
    ReceiveBatches {
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long = "batch", required = true)]
        batches: Vec<String>,
        #[arg(long)]
        submit: bool,
    },
    /// Manually correct an item's stock
    Adjust {
        item_id: i64,
        #[arg(long)]
        stock: i64,
        #[arg(long)]
        reason: String,
    },
    /// Show the batch ledger for an item
    Batches { item_id: i64 },
    /// Show the reconciled stock history for an item
    History { item_id: i64 },
    /// Show damage reports for an item
    Damage {
        item_id: i64,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: Option<u32>,
        /// Write the filtered report to a CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Record a damage report for an item
    RecordDamage {
        item_id: i64,
        #[arg(long)]
        date: chrono::NaiveDate,
        #[arg(long)]
        good: i64,
        #[arg(long)]
        damage: i64,
    },
    /// Department statistics grouped by category
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockdesk=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;
    tracing::debug!(environment = %config.environment, "configuration loaded");

    let api = ApiClient::new(&config.api)?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Items => commands::items::run(&api).await?,
        Commands::Receive {
            name,
            quantity,
            price,
            code,
            category,
            unit,
            location,
            supplier,
            min_stock,
            max_stock,
            submit,
        } => {
            let form = ReceiveForm {
                name,
                item_code: code,
                quantity,
                unit_price: price,
                category,
                unit,
                location,
                supplier,
                min_stock,
                max_stock,
            };
            let service = ReceivingService::new(api);
            commands::receive::run(&service, form, submit).await?;
        }
        Commands::ReceiveBatches {
            name,
            code,
            category,
            unit,
            batches,
            submit,
        } => {
            let parsed = batches
                .iter()
                .map(|spec| commands::receive::parse_batch_spec(spec))
                .collect::<Result<Vec<_>, _>>()?;
            let form = BatchReceiveForm {
                name,
                item_code: code,
                category,
                unit,
                batches: parsed,
            };
            let service = ReceivingService::new(api);
            commands::receive::run_batches(&service, form, submit).await?;
        }
        Commands::Adjust {
            item_id,
            stock,
            reason,
        } => {
            let service = AdjustmentService::new(api);
            commands::adjust::run(&service, item_id, stock, &reason).await?;
        }
        Commands::Batches { item_id } => {
            let service = LedgerService::new(api);
            commands::batches::run(&service, item_id).await?;
        }
        Commands::History { item_id } => {
            let service = HistoryService::new(api);
            commands::history::run(&service, item_id).await?;
        }
        Commands::Damage {
            item_id,
            year,
            month,
            export,
        } => {
            let service = DamageService::new(api);
            commands::damage::report(&service, item_id, year, month, export.as_deref()).await?;
        }
        Commands::RecordDamage {
            item_id,
            date,
            good,
            damage,
        } => {
            let service = DamageService::new(api);
            commands::damage::record(&service, item_id, date, good, damage).await?;
        }
        Commands::Stats => {
            let service = StatsService::new(api);
            commands::stats::run(&service).await?;
        }
    }

    Ok(())
}
