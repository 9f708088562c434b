mod common;
mod config;
mod network;
mod ui;

use clap::Parser;
use dotenvy::dotenv;
use network::ApiClient;
use tokio::sync::mpsc;
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "asan_chat",
    version,
    about = "Desktop client for the ASAN AI assistant"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Override the backend base URL from the config file
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    if !std::path::Path::new(&cli.config).exists() {
        // Starter file so users have something to edit.
        if let Err(err) = config::save_config(&cli.config, &app_config) {
            log::warn!("Failed to write starter config {}: {err}", cli.config);
        }
    }
    if let Some(api_url) = cli.api_url {
        app_config.api_url = api_url;
    }

    // UI -> API worker
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // API worker -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    let api_url = app_config.api_url.clone();
    tokio::spawn(async move {
        ApiClient::new(api_url, event_tx, cmd_rx).run().await;
    });

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);
    let mut app_config = Some(app_config);

    eframe::run_native(
        "ASAN AI Köməkçisi",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");
            let app_config = app_config
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!("Client started against {}", app_config.api_url);

            Ok(Box::new(ChatApp::new(
                cc,
                app_config,
                cmd_tx.clone(),
                event_receiver,
            )))
        }),
    )
}
