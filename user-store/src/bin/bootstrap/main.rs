use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use user_store::config::Config;
use user_store::domain::user::service::UserService;
use user_store::outbound::repositories::PostgresUserRepository;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "user_store=debug,credentials=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "user-store",
        version = env!("CARGO_PKG_VERSION"),
        "Bootstrap starting"
    );

    let config = Config::load()?;

    // A missing or weak pepper is fatal
    let password_hasher = config.password.build_hasher()?;
    let hashing = password_hasher.params();
    tracing::info!(
        memory_cost_kib = hashing.memory_cost_kib,
        time_cost = hashing.time_cost,
        parallelism = hashing.parallelism,
        output_len = hashing.output_len,
        "Password hasher configured"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let _user_service = UserService::new(user_repository, Arc::new(password_hasher));
    tracing::info!("User service initialized");

    tracing::info!("User store ready");

    Ok(())
}
