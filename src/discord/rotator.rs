//! 状态轮换器
//!
//! 每次调用 `rotate` 随机选一条状态，通过 PATCH 请求设置为自定义状态

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::sync::Arc;

use crate::discord::types::SettingsPatch;
use crate::error::RotateError;
use crate::model::statuses::StatusList;

/// 单次轮换的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationOutcome {
    /// 接口返回 200 / 204，附带设置的状态文本
    Rotated(String),
    /// 接口返回其他状态码，不重试
    Rejected(StatusCode),
}

/// 状态轮换器
///
/// 创建后不再修改；clone 共享 Client、token 和状态列表
#[derive(Debug, Clone)]
pub struct Rotator {
    client: Client,
    endpoint: Arc<str>,
    token: Arc<str>,
    statuses: StatusList,
}

impl Rotator {
    pub fn new(
        client: Client,
        endpoint: impl Into<Arc<str>>,
        token: impl Into<Arc<str>>,
        statuses: StatusList,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
            statuses,
        }
    }

    /// 构建请求头
    ///
    /// token 原样作为 Authorization，不加 `Bearer ` 前缀
    fn build_headers(token: &str) -> Result<HeaderMap, RotateError> {
        let mut authorization = HeaderValue::from_str(token)
            .map_err(|e| RotateError::Build(format!("无效的 token: {}", e)))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// 执行一次轮换
    ///
    /// 非 200 / 204 的响应只记录警告并返回 `Rejected`，
    /// 只有请求构建失败或网络错误才返回 Err。响应体被丢弃。
    pub async fn rotate(&self) -> Result<RotationOutcome, RotateError> {
        let status = self.statuses.pick().ok_or(RotateError::EmptyStatusList)?;

        let body = serde_json::to_vec(&SettingsPatch::text(status))?;
        let headers = Self::build_headers(&self.token)?;

        let response = self
            .client
            .patch(&*self.endpoint)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let code = response.status();
        if code == StatusCode::OK || code == StatusCode::NO_CONTENT {
            tracing::info!("状态已轮换: {}", status);
            Ok(RotationOutcome::Rotated(status.to_string()))
        } else {
            tracing::warn!("状态轮换失败，状态码: {}", code.as_u16());
            Ok(RotationOutcome::Rejected(code))
        }
    }
}
