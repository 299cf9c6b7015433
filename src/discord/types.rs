//! 用户设置接口的请求体

use serde::Serialize;

/// `PATCH /users/@me/settings` 请求体
#[derive(Debug, Serialize)]
pub struct SettingsPatch<'a> {
    pub custom_status: CustomStatus<'a>,
}

/// 自定义状态，表情字段显式序列化为 null
#[derive(Debug, Serialize)]
pub struct CustomStatus<'a> {
    pub text: &'a str,
    pub emoji_id: Option<String>,
    pub emoji_name: Option<String>,
}

impl<'a> SettingsPatch<'a> {
    /// 只设置文本、不带表情的自定义状态
    pub fn text(text: &'a str) -> Self {
        Self {
            custom_status: CustomStatus {
                text,
                emoji_id: None,
                emoji_name: None,
            },
        }
    }
}
