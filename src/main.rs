use clap::Parser;
use medbot::bot::{AppState, Session};
use medbot::config::{Args, Commands};
use medbot::error::AppError;
use medbot::logger::init_logger;
use medbot::router::create_app_router;
use medbot::terminal::run_conversation;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    init_logger(args.verbose);

    match args.command() {
        Commands::Chat => {
            let mut session = Session::new(&args.name);
            tracing::info!(name = %args.name, "starting terminal conversation");
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            run_conversation(&mut session, stdin, tokio::io::stdout()).await
        }
        Commands::Serve { addr, session_ttl } => {
            // Initialize application state
            let state = Arc::new(AppState::new());

            // Periodically drop sessions nobody has talked to within the TTL
            let ttl = Duration::from_secs(session_ttl);
            let sweeper = state.clone();
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval(ttl);
                loop {
                    ticker.tick().await;
                    let evicted = sweeper.evict_idle(ttl);
                    if evicted > 0 {
                        tracing::info!(evicted, "idle sessions dropped");
                    }
                }
            });

            // Build application router with all routes and middleware
            let app = create_app_router(state);

            let listener = tokio::net::TcpListener::bind(addr)
                .await
                .map_err(|source| AppError::Bind { addr, source })?;
            tracing::info!("Server running on http://{}", addr);

            axum::serve(listener, app).await.map_err(AppError::Serve)
        }
    }
}
