// crates/th_config/src/error.rs

//! 配置层错误类型

use th_foundation::ThError;

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO 错误
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 解析错误
    #[error("解析错误: {0}")]
    Parse(String),

    /// 无效值
    #[error("无效值 '{key}': {value} - {reason}")]
    InvalidValue {
        /// 配置键
        key: String,
        /// 配置值
        value: String,
        /// 原因
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, value: impl ToString, reason: &str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<ConfigError> for ThError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(e) => ThError::io_with_source("读取配置失败", e),
            ConfigError::Parse(msg) => ThError::invalid_config("<file>", "", msg),
            ConfigError::InvalidValue { key, value, reason } => {
                ThError::invalid_config(key, value, reason)
            }
        }
    }
}
