//! 英雄构建错误处理模块
//!
//! 构建器与快照编解码共用的错误类型。

use bincode::error::{DecodeError, EncodeError};
use thiserror::Error;

/// 构建英雄过程中可能出现的错误类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeroError {
    /// 必填参数缺失或无效（职业、名字）
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 快照序列化错误
    #[error("Encode error: {0}")]
    Encode(String),

    /// 快照反序列化错误
    #[error("Decode error: {0}")]
    Decode(String),
}

impl HeroError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        HeroError::InvalidArgument(msg.into())
    }

    /// 是否为参数校验失败
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, HeroError::InvalidArgument(_))
    }
}

impl From<DecodeError> for HeroError {
    fn from(err: DecodeError) -> Self {
        HeroError::Decode(err.to_string())
    }
}

impl From<EncodeError> for HeroError {
    fn from(err: EncodeError) -> Self {
        HeroError::Encode(err.to_string())
    }
}

/// 将错误转换为面向用户的提示
pub fn handle_error(error: &HeroError) -> String {
    match error {
        HeroError::InvalidArgument(msg) => format!("Invalid hero: {msg}"),
        HeroError::Decode(_) => "hero snapshot is corrupted".to_string(),
        _ => error.to_string(),
    }
}
