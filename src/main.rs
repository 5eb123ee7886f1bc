use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod dashboard;
mod models;
mod services;
mod utils;

use commands::Flow;
use config::Config;
use dashboard::Dashboard;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tickerboard=info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();

    info!("📈 Starting tickerboard...");

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&config.chart_dir) {
        error!("Failed to create chart directory {}: {}", config.chart_dir.display(), e);
        return;
    }

    let mut dashboard = Dashboard::from_config(config);
    info!("Charts are written to {}", dashboard.charts().chart_dir().display());

    dashboard.load().await;
    println!("{}", dashboard.render());
    println!("{}", commands::help::usage());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if commands::handle_line(&mut dashboard, &line).await == Flow::Quit {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        }
    }

    info!("👋 tickerboard stopped");
}
