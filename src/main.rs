use todo_api::{app, config::LogConfig, AppState};

fn init_tracing(log: &LogConfig) {
    if log.json {
        tracing_subscriber::fmt()
            .with_env_filter(log.filter.as_str())
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(log.filter.as_str())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let app_state = AppState::init()?;
    init_tracing(&app_state.config.log);
    tracing::info!(status_codes = ?app_state.config.status_codes, "store initialised");

    let config = app_state.config.clone();
    let app = app::build_app(app_state);
    app::serve(app, &config).await
}
