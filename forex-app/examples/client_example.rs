//! Client example demonstrating the admin flow against a running server.
//!
//! Run with: cargo run -p forex-app --example client_example --no-default-features --features sqlite

use forex_client::ForexClient;
use forex_hex::{RateService, inbound::HttpServer};
use forex_repo::build_repo;
use forex_types::{Rate, RatePatch};
use std::net::SocketAddr;
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind first so the server owns the port the client talks to
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("forex.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    println!("🚀 Starting server on {addr}...");
    println!("   Database: {db_url}");

    let repo = build_repo(&db_url).await?;
    let service = RateService::new(repo);
    service.seed_defaults().await?;

    let router = HttpServer::new(service).router();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    let client = ForexClient::new(format!("http://{addr}"));

    println!("\n📋 Seeded rates:");
    for stored in client.list_rates().await? {
        println!(
            "   {:<5} buy {:>8} sell {:>8}",
            stored.id, stored.rate.buy, stored.rate.sell
        );
    }

    let yen = Rate::new(
        "JPY",
        "YEN",
        "¥",
        "https://d3onttu1dfuhsx.cloudfront.net/jp.svg",
        "0.55",
        "0.50",
    );
    println!("\n➕ {}", client.add_rate(&yen).await?.message);

    let patch = RatePatch {
        buy: Some("0.60".to_string()),
        ..Default::default()
    };
    println!("✏️  {}", client.update_rate("JPY", &patch).await?.message);

    let jpy = client
        .list_rates()
        .await?
        .into_iter()
        .find(|r| r.id.as_str() == "JPY");
    if let Some(jpy) = jpy {
        println!("   JPY now buy {} sell {}", jpy.rate.buy, jpy.rate.sell);
    }

    println!("🗑️  {}", client.delete_rate("JPY").await?.message);

    match client.update_rate("JPY", &patch).await {
        Err(e) => println!("   Updating a deleted rate fails: {e}"),
        Ok(_) => println!("   Unexpected: update of deleted rate succeeded"),
    }

    Ok(())
}
