// crates/th_foundation/src/error.rs

//! 统一错误类型
//!
//! 各子层（geo、config、io）的错误枚举最终都汇入 `ThError`，
//! 流水线与命令行只需面对这一个类型。
//!
//! ```
//! use th_foundation::error::{ThError, ThResult};
//!
//! fn floor_of(elevations: &[f64]) -> ThResult<f64> {
//!     elevations
//!         .iter()
//!         .copied()
//!         .reduce(f64::min)
//!         .ok_or_else(|| ThError::invalid_input("采样点集合为空"))
//! }
//! assert!(floor_of(&[]).is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// 统一结果类型
pub type ThResult<T> = Result<T, ThError>;

/// TrackHeight 错误类型
#[derive(Error, Debug)]
pub enum ThError {
    /// 读写失败
    #[error("IO错误: {message}")]
    Io {
        /// 发生错误时的操作描述
        message: String,
        /// 底层 IO 错误
        #[source]
        source: Option<std::io::Error>,
    },

    /// 输入文件不存在
    #[error("文件不存在: {path}")]
    FileNotFound {
        /// 请求的路径
        path: PathBuf,
    },

    /// 文件内容无法解析
    #[error("文件解析错误: {file} 第{line}行: {message}")]
    ParseError {
        /// 来源文件
        file: PathBuf,
        /// 出错行号（从 1 开始）
        line: usize,
        /// 原因
        message: String,
    },

    /// 输入数据不可用（为空、不一致等）
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 原因
        message: String,
    },

    /// 数据长度与栅格尺寸不符
    #[error("数组大小不匹配: {name} 期望{expected}, 实际{actual}")]
    SizeMismatch {
        /// 数据名称
        name: &'static str,
        /// 由尺寸推出的长度
        expected: usize,
        /// 实际长度
        actual: usize,
    },

    /// 配置项取值不合法
    #[error("配置值无效: {key}={value}, 原因: {reason}")]
    InvalidConfig {
        /// 配置键
        key: String,
        /// 取值
        value: String,
        /// 原因
        reason: String,
    },

    /// 采样点无法投影
    #[error("投影错误: {0}")]
    Projection(String),

    /// 高度图编码失败
    #[error("图像编码错误: {0}")]
    Image(String),
}

impl ThError {
    /// IO 错误（附带底层错误）
    pub fn io_with_source(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(source),
        }
    }

    /// 文件不存在
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// 第 `line` 行解析失败
    pub fn parse(file: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// 无效输入
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// 配置值无效
    pub fn invalid_config(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// 投影错误
    pub fn projection(message: impl Into<String>) -> Self {
        Self::Projection(message.into())
    }

    /// 图像编码错误
    pub fn image(message: impl Into<String>) -> Self {
        Self::Image(message.into())
    }

    /// 长度不等时返回 `SizeMismatch`
    #[inline]
    pub fn check_size(name: &'static str, expected: usize, actual: usize) -> ThResult<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::SizeMismatch {
                name,
                expected,
                actual,
            })
        }
    }
}

impl From<std::io::Error> for ThError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: Some(err),
        }
    }
}
