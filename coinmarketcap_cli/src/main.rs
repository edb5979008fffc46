mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use coinmarketcap_lib::{load_config, Coinmarketcap, Settings};

use crate::commands::{convert, crypto, exchange, global};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "cmc")]
#[command(about = "Query CoinMarketCap within the limits of your account plan")]
struct Cli {
    /// YAML config file with a currency.coinmarketcap section
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: table, markdown or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Quote currencies, comma separated (e.g. USD,EUR)
    #[arg(long, value_delimiter = ',', global = true)]
    convert: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cryptocurrency metadata
    Info(commands::crypto::IdsArgs),
    /// Map of active cryptocurrencies to ids
    Map,
    /// Latest listings ranked by market cap
    Listings(commands::PageArgs),
    /// Latest quotes
    Quotes(commands::crypto::IdsArgs),
    /// Historical quotes
    QuotesHistory(commands::HistoryArgs),
    /// Market pairs of a cryptocurrency
    MarketPairs(commands::PairsArgs),
    /// OHLCV, latest or over a time range
    Ohlcv(commands::crypto::OhlcvArgs),
    /// Exchange metadata
    ExchangeInfo(commands::crypto::IdsArgs),
    /// Map of exchanges to ids
    Exchanges(commands::PageArgs),
    /// Market pairs listed on an exchange
    ExchangePairs(commands::PairsArgs),
    /// Latest exchange volume quotes
    ExchangeQuotes(commands::crypto::IdsArgs),
    /// Historical exchange volume quotes
    ExchangeHistory(commands::HistoryArgs),
    /// Latest global market metrics
    Global,
    /// Historical global market metrics
    GlobalHistory(commands::global::GlobalHistoryArgs),
    /// Convert an amount of one cryptocurrency
    Convert(commands::convert::ConvertArgs),
    /// Show the configured plan and the endpoints it unlocks
    Plan,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coinmarketcap_lib=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let settings = match &cli.config {
        Some(path) => load_config(path)?,
        None => Settings::default(),
    }
    .apply_env();

    if let Commands::Plan = cli.command {
        let plan = settings.plan()?;
        commands::plan::run(plan, &format);
        return Ok(());
    }

    let mut client = Coinmarketcap::new();
    client.setup(settings)?;
    if !cli.convert.is_empty() {
        client.set_convert(cli.convert.clone());
    }
    let currency = cli
        .convert
        .first()
        .cloned()
        .unwrap_or_else(|| "USD".to_string());

    match &cli.command {
        Commands::Info(args) => crypto::run_info(args, &client, &format).await?,
        Commands::Map => crypto::run_map(&client, &format).await?,
        Commands::Listings(args) => {
            crypto::run_listings(args, &client, &currency, &format).await?
        }
        Commands::Quotes(args) => crypto::run_quotes(args, &client, &currency, &format).await?,
        Commands::QuotesHistory(args) => {
            crypto::run_quotes_history(args, &client, &currency, &format).await?
        }
        Commands::MarketPairs(args) => {
            crypto::run_market_pairs(args, &client, &currency, &format).await?
        }
        Commands::Ohlcv(args) => crypto::run_ohlcv(args, &client, &currency, &format).await?,
        Commands::ExchangeInfo(args) => exchange::run_info(args, &client, &format).await?,
        Commands::Exchanges(args) => exchange::run_map(args, &client, &format).await?,
        Commands::ExchangePairs(args) => {
            exchange::run_market_pairs(args, &client, &currency, &format).await?
        }
        Commands::ExchangeQuotes(args) => {
            exchange::run_quotes(args, &client, &currency, &format).await?
        }
        Commands::ExchangeHistory(args) => {
            exchange::run_history(args, &client, &currency, &format).await?
        }
        Commands::Global => global::run_latest(&client, &currency, &format).await?,
        Commands::GlobalHistory(args) => {
            global::run_history(args, &client, &currency, &format).await?
        }
        Commands::Convert(args) => convert::run(args, &client, &format).await?,
        Commands::Plan => {}
    }

    Ok(())
}
