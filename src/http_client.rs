//! HTTP Client 构建模块
//!
//! 所有 worker 共享同一个 Client，复用连接池

use reqwest::Client;
use std::time::Duration;

/// 请求头中的 User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// 构建共享的 HTTP Client
///
/// `timeout` 覆盖连接、发送请求和读取响应的全过程
pub fn build_client(timeout: Duration) -> anyhow::Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    tracing::debug!("HTTP Client 已创建，超时 {:?}", timeout);
    Ok(client)
}
