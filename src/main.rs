//! Subledger binary: wires configuration, storage, the recompute worker,
//! and the read-only HTTP API together.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use subledger::adapters::cache::RedisTotalSumCache;
use subledger::adapters::http::subscriptions::{subscriptions_router, SubscriptionsAppState};
use subledger::adapters::jobs::{JobWorker, RedisJobQueue};
use subledger::adapters::postgres::{
    PostgresSubscriptionReader, PostgresSubscriptionRepository,
};
use subledger::application::handlers::RecomputePriceHandler;
use subledger::config::AppConfig;
use subledger::ports::{JobQueue, SubscriptionRepository, TotalSumCache};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.server.log_level)
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "starting subledger"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let redis_client = redis::Client::open(config.redis.url.as_str())?;
    let redis_conn = redis_client.get_multiplexed_tokio_connection().await?;

    let subscriptions: Arc<dyn SubscriptionRepository> =
        Arc::new(PostgresSubscriptionRepository::new(pool.clone()));
    let queue: Arc<dyn JobQueue> = Arc::new(RedisJobQueue::new(redis_conn.clone()));
    let total_sum_cache: Arc<dyn TotalSumCache> =
        Arc::new(RedisTotalSumCache::new(redis_conn));

    let worker = JobWorker::new(
        queue.clone(),
        RecomputePriceHandler::new(subscriptions.clone()),
        config.worker.poll_interval(),
    );
    tokio::spawn(worker.run());

    let state = SubscriptionsAppState {
        reader: Arc::new(PostgresSubscriptionReader::new(pool)),
        subscriptions,
        total_sum_cache,
    };

    let app = axum::Router::new()
        .nest("/api/subscriptions", subscriptions_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
