//! 状态列表
//!
//! 从 `statuses.json` 加载候选状态文本，启动后只读，所有 worker 共享

use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::LoadError;

/// `statuses.json` 文件结构
#[derive(Debug, Deserialize)]
struct StatusFile {
    statuses: Vec<String>,
}

/// 共享的状态列表
///
/// 内部为 `Arc<[String]>`，clone 只增加引用计数
#[derive(Debug, Clone)]
pub struct StatusList {
    statuses: Arc<[String]>,
}

impl StatusList {
    pub fn new(statuses: Vec<String>) -> Self {
        Self {
            statuses: statuses.into(),
        }
    }

    /// 获取默认状态文件路径
    pub fn default_statuses_path() -> &'static str {
        "statuses.json"
    }

    /// 从 JSON 字符串解析状态列表
    pub fn from_json(json_string: &str) -> Result<Self, serde_json::Error> {
        let file: StatusFile = serde_json::from_str(json_string)?;
        Ok(Self::new(file.statuses))
    }

    /// 从文件加载状态列表
    ///
    /// 空列表不在这里拒绝，由调用方决定
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 均匀随机选择一个状态，列表为空时返回 None
    ///
    /// 使用 fastrand 的线程本地生成器，只在线程首次使用时播种
    pub fn pick(&self) -> Option<&str> {
        if self.statuses.is_empty() {
            return None;
        }
        Some(&self.statuses[fastrand::usize(..self.statuses.len())])
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, status: &str) -> bool {
        self.statuses.iter().any(|s| s == status)
    }
}
