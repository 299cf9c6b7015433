//! 错误类型
//!
//! 启动阶段的错误（`LoadError`、`InputError`）是致命的；
//! 单次轮换的错误（`RotateError`）只记录日志，worker 继续运行。

use std::path::PathBuf;

/// 配置文件 / 状态列表文件加载错误
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("读取文件失败 {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON 解析失败 {path:?}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("YAML 解析失败 {path:?}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("状态列表为空: {0:?}")]
    EmptyStatusList(PathBuf),
}

/// 交互输入错误
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("读取标准输入失败: {0}")]
    Read(#[from] std::io::Error),

    #[error("无效的 worker 数量: {0:?}")]
    InvalidCount(String),
}

/// 单次轮换错误
#[derive(Debug, thiserror::Error)]
pub enum RotateError {
    #[error("状态列表为空，无法选择状态")]
    EmptyStatusList,

    #[error("构建请求失败: {0}")]
    Build(String),

    #[error("HTTP 请求执行失败: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<serde_json::Error> for RotateError {
    fn from(e: serde_json::Error) -> Self {
        Self::Build(format!("JSON 序列化失败: {}", e))
    }
}

impl From<reqwest::Error> for RotateError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            Self::Build(e.to_string())
        } else {
            Self::Transport(e)
        }
    }
}
