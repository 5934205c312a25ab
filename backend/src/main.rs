//! Library catalog backend entry point
//!
//! All catalog data is exposed via GraphQL at /graphql.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog::cli::CliOptions;
use catalog::config::Config;
use catalog::db::Database;
use catalog::graphql::schema_sdl;
use catalog::{AppState, build_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = CliOptions::from_args();

    if let Some(path) = cli.print_schema {
        let sdl = schema_sdl();
        match path {
            Some(path) => std::fs::write(&path, sdl)
                .with_context(|| format!("Failed to write schema to {}", path.display()))?,
            None => println!("{}", sdl),
        }
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    tracing::info!("Starting catalog backend");

    let config = Config::from_env()?;
    tracing::info!(
        database_url = %config.database_url,
        max_page_size = config.max_page_size,
        "Configuration loaded"
    );

    if let Some(dir) = config
        .database_url
        .strip_prefix("sqlite://")
        .map(std::path::Path::new)
        .and_then(|path| path.parent())
        .filter(|dir| !dir.as_os_str().is_empty())
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    }

    let db = Database::connect(&config.database_url, config.database_max_connections).await?;
    db.migrate().await?;
    tracing::info!("Database connected and migrated");

    if cli.seed || config.seed_demo_data {
        let result = db.seed().await;
        tracing::info!(
            tables = result.tables_seeded.len(),
            errors = result.errors.len(),
            "Demo data seeded"
        );
    }

    let addr = config.bind_address();
    let port = config.port;
    let app = build_app(AppState::new(&config, db));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("GraphQL playground: http://localhost:{}/graphql", port);

    axum::serve(listener, app).await?;

    Ok(())
}
