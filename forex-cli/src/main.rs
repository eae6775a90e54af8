//! Forex CLI
//!
//! Command-line admin tool for the forex rates API.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use forex_client::ForexClient;
use forex_types::{Rate, RatePatch};

#[derive(Parser)]
#[command(name = "forex")]
#[command(author, version, about = "Forex rates API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the forex rates API
    #[arg(long, env = "FOREX_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rate operations
    Rates {
        #[command(subcommand)]
        action: RateCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum RateCommands {
    /// List all rates
    List,
    /// Add a rate (replaces any rate with the same code)
    Add {
        /// Currency code, also the storage key
        code: String,
        #[command(flatten)]
        fields: RateFields,
    },
    /// Update only the given fields of a stored rate
    Update {
        /// Storage key of the rate
        id: String,
        /// New currency code
        #[arg(long)]
        code: Option<String>,
        #[command(flatten)]
        fields: RateFields,
    },
    /// Delete a rate
    Delete {
        /// Storage key of the rate
        id: String,
    },
}

#[derive(Args)]
struct RateFields {
    /// Display name
    #[arg(long)]
    name: Option<String>,
    /// Display glyph
    #[arg(long)]
    symbol: Option<String>,
    /// Flag image URL
    #[arg(long)]
    flag: Option<String>,
    /// Buy price
    #[arg(long)]
    buy: Option<String>,
    /// Sell price
    #[arg(long)]
    sell: Option<String>,
}

impl RateFields {
    fn into_rate(self, code: String) -> Rate {
        Rate {
            code,
            name: self.name.unwrap_or_default(),
            symbol: self.symbol.unwrap_or_default(),
            flag: self.flag.unwrap_or_default(),
            buy: self.buy.unwrap_or_default(),
            sell: self.sell.unwrap_or_default(),
        }
    }

    fn into_patch(self, code: Option<String>) -> RatePatch {
        RatePatch {
            code,
            name: self.name,
            symbol: self.symbol,
            flag: self.flag,
            buy: self.buy,
            sell: self.sell,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = ForexClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Rates { action } => match action {
            RateCommands::List => {
                let rates = client.list_rates().await?;
                println!("{}", serde_json::to_string_pretty(&rates)?);
            }
            RateCommands::Add { code, fields } => {
                let ack = client.add_rate(&fields.into_rate(code)).await?;
                println!("✓ {}", ack.message);
            }
            RateCommands::Update { id, code, fields } => {
                let patch = fields.into_patch(code);
                if patch.is_empty() {
                    anyhow::bail!("Nothing to update: pass at least one field flag");
                }
                let ack = client.update_rate(&id, &patch).await?;
                println!("✓ {}", ack.message);
            }
            RateCommands::Delete { id } => {
                let ack = client.delete_rate(&id).await?;
                println!("✓ {}", ack.message);
            }
        },
    }

    Ok(())
}
