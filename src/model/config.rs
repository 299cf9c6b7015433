use serde::Deserialize;
use std::env;
use std::fs;
use std::num::NonZeroU64;
use std::path::Path;

use crate::error::LoadError;

/// Discord 用户设置接口
pub const DEFAULT_API_URL: &str = "https://discord.com/api/v9/users/@me/settings";

const DEFAULT_REQUEST_TIMEOUT_SECS: NonZeroU64 = match NonZeroU64::new(30) {
    Some(secs) => secs,
    None => unreachable!(),
};

/// `config.yml` 文件结构，所有配置位于顶层 `config` 键下
#[derive(Debug, Deserialize)]
struct ConfigFile {
    config: Config,
}

/// 账号配置
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// 账号 token，原样放入 Authorization 头
    pub token: String,

    /// 用户设置接口地址
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// 单次请求超时（秒），不能为 0
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: NonZeroU64,
}

impl Config {
    /// 从环境变量覆盖配置
    pub fn override_from_env(&mut self) {
        if let Ok(token) = env::var("DISCORD_TOKEN") {
            self.token = token;
        }
        if let Ok(url) = env::var("API_URL") {
            self.api_url = url;
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout_secs() -> NonZeroU64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Config {
    /// 获取默认配置文件路径
    pub fn default_config_path() -> &'static str {
        "config.yml"
    }

    /// 从 YAML 字符串解析配置
    pub fn from_yaml(yaml_string: &str) -> Result<Self, serde_yaml::Error> {
        let file: ConfigFile = serde_yaml::from_str(yaml_string)?;
        Ok(file.config)
    }

    /// 从文件加载配置
    ///
    /// 文件不存在、格式错误或缺少 `config.token` 都视为失败
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}
