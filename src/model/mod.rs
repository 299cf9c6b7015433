//! 数据模型
//!
//! - `arg`: 命令行参数
//! - `config`: 账号配置（config.yml）
//! - `statuses`: 状态列表（statuses.json）

pub mod arg;
pub mod config;
pub mod statuses;
