use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = quill::config::Config::from_env()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        gemini_model = %cfg.gemini_model,
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel
    );

    let pool = quill::db::connect(&cfg.database_url).await?;
    let users = quill::db::UserStorage::new(pool);
    users.init_schema().await?;

    let gemini = quill::api::gemini_api::GeminiClient::new(
        reqwest::Client::new(),
        cfg.gemini_api_key.clone(),
        &cfg.gemini_model,
    )?;

    // Build axum router and serve
    let state = quill::router::QuillState::new(users, gemini);
    let app = quill::router::quill_router(state);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
