mod discord;
mod error;
mod http_client;
mod input;
mod model;
mod worker;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::discord::Rotator;
use crate::error::LoadError;
use crate::http_client::build_client;
use crate::model::arg::Args;
use crate::model::config::Config;
use crate::model::statuses::StatusList;
use crate::worker::Shutdown;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let workers = match args.workers {
        Some(count) => count,
        None => input::read_worker_count(std::io::stdin().lock(), std::io::stdout())
            .context("读取 worker 数量失败")?,
    };

    tracing::info!("加载状态列表");
    let statuses_path = args
        .statuses
        .unwrap_or_else(|| StatusList::default_statuses_path().to_string());
    let statuses = StatusList::load(&statuses_path).context("加载状态列表失败")?;
    if statuses.is_empty() {
        return Err(LoadError::EmptyStatusList(statuses_path.into()))
            .context("加载状态列表失败");
    }
    tracing::info!("共找到 {} 条状态", statuses.len());

    let config_path = args
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let mut config = Config::load(&config_path).context("加载配置失败")?;
    config.override_from_env();

    let client = build_client(Duration::from_secs(config.request_timeout_secs.get()))
        .context("创建 HTTP 客户端失败")?;
    let rotator = Rotator::new(client, config.api_url, config.token, statuses);

    let shutdown = Shutdown::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("收到 Ctrl-C，正在停止 worker");
                shutdown.trigger();
            }
        });
    }

    worker::run(
        workers,
        &rotator,
        Duration::from_secs(args.interval),
        shutdown,
    )
    .await;
    Ok(())
}
