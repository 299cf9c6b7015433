//! Discord 自定义状态轮换
//!
//! # 请求格式
//! ```text
//! PATCH https://discord.com/api/v9/users/@me/settings
//! Authorization: <token>
//! Content-Type: application/json
//!
//! {"custom_status":{"text":"...","emoji_id":null,"emoji_name":null}}
//! ```

pub mod rotator;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use rotator::{RotationOutcome, Rotator};
