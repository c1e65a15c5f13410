use anyhow::Result;
use cardserve::app::event::AppEvent;
use cardserve::runtime::publisher::LinePublisher;
use cardserve::runtime::server::{self, Runtime};
use cardserve::runtime::wire;
use cardserve::{config, logging};
use std::io;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;
    config::init_config_file(&config::config_path(), &cfg);

    let result = run(cfg).await;

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cfg: config::AppConfig) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let publisher = LinePublisher::new(io::stdout());
    let mut runtime = Runtime::new(&cfg.runtime, publisher);

    // Spawn input task
    let input_tx = event_tx.clone();
    tokio::spawn(async move {
        wire::pump_input(BufReader::new(tokio::io::stdin()), input_tx).await;
    });

    // Spawn interrupt watcher
    let signal_tx = event_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = signal_tx.send(AppEvent::Shutdown);
        }
    });
    drop(event_tx);

    info!(route = %cfg.runtime.route, "listening on stdin");

    // Main event loop
    server::drive(&mut runtime, &mut event_rx).await?;

    info!(
        served = runtime.served,
        clients = runtime.store().client_count(),
        "stopped"
    );
    Ok(())
}
