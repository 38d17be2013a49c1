//! User API service.
//!
//! An HTTP service exposing operational endpoints and a mock user
//! management API, built around a fixed request pipeline.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌────────────────────────────────────────────────────────┐
//!                 │                      USER API                          │
//!                 │                                                        │
//!  Client ───────▶│  CORS ──▶ metrics ──▶ request ID ──▶ access log ──▶   │
//!                 │                                        body decoder   │
//!                 │                                              │         │
//!                 │                                              ▼         │
//!                 │                    ┌───────────┐    ┌──────────────┐   │
//!                 │                    │  router   │───▶│ authorization │  │
//!                 │                    │  lookup   │    │     gate      │  │
//!                 │                    └───────────┘    └──────┬───────┘   │
//!                 │                                            │           │
//!  Client ◀───────│  response ◀──────────── handler ◀──────────┘           │
//!                 │                                                        │
//!                 │  ┌──────────────────────────────────────────────────┐  │
//!                 │  │            Cross-Cutting Concerns                │  │
//!                 │  │  ┌────────┐  ┌───────────────┐  ┌─────────────┐  │  │
//!                 │  │  │ config │  │ observability │  │  security   │  │  │
//!                 │  │  └────────┘  └───────────────┘  └─────────────┘  │  │
//!                 │  └──────────────────────────────────────────────────┘  │
//!                 └────────────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use user_api::config;
use user_api::config::API_KEY_UNSET;
use user_api::observability;
use user_api::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config first: the log format depends on the environment.
    let config = config::from_env()?;

    observability::logging::init(config.environment);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "user-api starting");
    tracing::info!(
        environment = %config.environment,
        greeting = %config.greeting,
        api_key_configured = config.api_key != API_KEY_UNSET,
        port = config.port,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
