//! # Forex Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment (or the store credentials file)
//! - Initialize the rate store adapter
//! - Seed the default rates into an empty store
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forex_hex::{RateService, inbound::HttpServer};
use forex_repo::build_repo;
use forex_types::SeedOutcome;

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("forex-service"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Span export is only wired up when a collector is configured
    let otel = match std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(_) => Some(init_tracer()?),
        Err(_) => None,
    };
    let telemetry = otel
        .as_ref()
        .map(|(tracer, _)| tracing_opentelemetry::layer().with_tracer(tracer.clone()));

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,forex_app=debug,forex_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting forex server on port {}", config.port);

    // Build repository (handles connection and migration)
    let repo = build_repo(&config.database_url).await?;

    let service = RateService::new(repo);

    // Seeding is best-effort: a failure is logged and serving continues
    match service.seed_defaults().await {
        Ok(SeedOutcome::Seeded(count)) => tracing::info!(count, "Seeded default rates"),
        Ok(SeedOutcome::AlreadyPopulated) => {
            tracing::debug!("Rate store already populated, skipping seeding")
        }
        Err(e) => tracing::error!("Failed to seed default rates: {}", e),
    }

    // Create and run the HTTP server
    let server = HttpServer::new(service).with_static_dir(config.static_dir);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some((_, provider)) = otel {
        let _ = provider.shutdown();
    }
    Ok(())
}
