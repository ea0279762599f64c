use std::sync::Arc;

use selfserve_assistant::config::WidgetConfig;
use selfserve_assistant::frontend::TerminalFrontend;
use selfserve_assistant::store::{FileStore, StateStore, keys};
use selfserve_assistant::widget::{ChatWidget, spawn_auto_open};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = WidgetConfig::from_env()?;

    let state_path = std::env::var("SELFSERVE_STATE_PATH")
        .unwrap_or_else(|_| "./data/assistant-state.json".to_string());

    eprintln!("🤖 SelfServe Assistant v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   State: {}", state_path);
    eprintln!(
        "   Auto-open: after {}s unless dismissed",
        config.auto_open_after.as_secs()
    );
    eprintln!("   Pick a quick reply by number, or type a message. /quit to exit.\n");

    let store: Arc<dyn StateStore> = Arc::new(FileStore::open(&state_path).await?);

    // Fresh-visitor mode: forget the dismissal flag from earlier runs
    if std::env::var("SELFSERVE_RESET").as_deref() == Ok("1") {
        store.remove(keys::DISMISSED).await?;
        eprintln!("   Reset: dismissal flag cleared\n");
    }

    let widget = ChatWidget::mount(config, store).await;
    let _auto_open = spawn_auto_open(Arc::clone(&widget));

    TerminalFrontend::new(widget).run().await?;
    Ok(())
}
