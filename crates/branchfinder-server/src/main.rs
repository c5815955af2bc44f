mod api;
mod middleware;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, sample_branches, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = branchfinder_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let branches = match &config.data_path {
        Some(path) => match branchfinder_loader::load_from_path(path).await {
            Ok(branches) => branches,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "cannot load dataset file");
                return Err(e).context("failed to load branch dataset");
            }
        },
        None => {
            tracing::info!("no dataset file configured; serving built-in sample");
            sample_branches()
        }
    };

    let static_dir = config.static_dir.is_dir().then_some(config.static_dir.as_path());
    if static_dir.is_none() {
        tracing::debug!(
            dir = %config.static_dir.display(),
            "static directory not found; not serving assets"
        );
    }

    let app = build_app(AppState::from_branches(&branches), static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        env = %config.env,
        branches = branches.len(),
        "branch data server listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
