//! Worker 调度
//!
//! 每个 worker 是一个独立的 tokio 任务：轮换、休眠、再轮换，
//! 直到收到停止信号。worker 之间只共享只读数据。

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::discord::Rotator;

/// 默认轮换间隔
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// 停止信号
///
/// 触发后保持触发状态，之后才开始等待的任务也会立即返回
#[derive(Clone)]
pub struct Shutdown {
    sender: Arc<watch::Sender<bool>>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// 触发停止
    pub fn trigger(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.sender.borrow()
    }

    /// 等待停止信号
    pub async fn wait(&self) {
        let mut receiver = self.sender.subscribe();
        // sender 由 self 持有，wait_for 不会因通道关闭而失败
        let _ = receiver.wait_for(|stopped| *stopped).await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// 启动 `count` 个 worker，每个 worker 持有自己的 Rotator 副本
pub fn spawn_workers(
    count: usize,
    rotator: &Rotator,
    interval: Duration,
    shutdown: &Shutdown,
) -> Vec<JoinHandle<()>> {
    (0..count)
        .map(|id| {
            let rotator = rotator.clone();
            let shutdown = shutdown.clone();
            tokio::spawn(
                run_worker(rotator, interval, shutdown)
                    .instrument(tracing::info_span!("worker", id)),
            )
        })
        .collect()
}

async fn run_worker(rotator: Rotator, interval: Duration, shutdown: Shutdown) {
    while !shutdown.is_triggered() {
        if let Err(e) = rotator.rotate().await {
            tracing::error!("轮换出错: {}", e);
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = shutdown.wait() => break,
        }
    }
    tracing::debug!("worker 已停止");
}

/// 启动 worker 并阻塞，直到所有 worker 退出且收到停止信号
///
/// `count` 为 0 时不产生任何请求，同样阻塞到停止信号
pub async fn run(count: usize, rotator: &Rotator, interval: Duration, shutdown: Shutdown) {
    let handles = spawn_workers(count, rotator, interval, &shutdown);
    tracing::info!("已启动 {} 个 worker，轮换间隔 {:?}", handles.len(), interval);

    let (results, _) = tokio::join!(join_all(handles), shutdown.wait());
    for result in results {
        if let Err(e) = result {
            tracing::error!("worker 异常退出: {}", e);
        }
    }
}
