// crates/th_io/src/error.rs
//! IO 错误类型定义
//!
//! 提供 IO 模块的统一错误枚举。所有错误最终可转换为 `ThError` 以实现跨层错误传递。

use th_foundation::ThError;
use thiserror::Error;

/// IO 模块结果类型别名
pub type IoResult<T> = Result<T, IoError>;

/// IO 错误枚举
#[derive(Error, Debug)]
pub enum IoError {
    /// 表头中找不到指定列
    #[error("找不到列 '{column}': {file} (现有列: {available:?})")]
    MissingColumn {
        /// 请求的列名
        column: String,
        /// 文件路径
        file: String,
        /// 表头中实际存在的列
        available: Vec<String>,
    },

    /// 解析错误
    #[error("文件解析错误: {file}:{line} - {message}")]
    ParseError {
        /// 文件路径
        file: String,
        /// 行号（从1开始）
        line: usize,
        /// 错误信息
        message: String,
    },

    /// 文件中没有有效数据
    #[error("没有有效数据: {file}")]
    EmptyInput {
        /// 文件路径
        file: String,
    },

    /// 图像编码失败
    #[error("图像编码失败: {path}, {message}")]
    ImageEncode {
        /// 输出路径
        path: String,
        /// 底层错误信息
        message: String,
    },

    /// 基础层错误转换
    #[error("基础层错误: {0}")]
    Foundation(#[from] ThError),
}

impl IoError {
    pub(crate) fn parse(file: &str, line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            file: file.to_string(),
            line,
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for IoError {
    fn from(err: std::io::Error) -> Self {
        IoError::Foundation(ThError::from(err))
    }
}

impl From<IoError> for ThError {
    fn from(err: IoError) -> Self {
        match err {
            IoError::MissingColumn { column, file, .. } => {
                ThError::invalid_input(format!("找不到列 '{column}': {file}"))
            }
            IoError::ParseError { file, line, message } => ThError::parse(file, line, message),
            IoError::EmptyInput { file } => {
                ThError::invalid_input(format!("没有有效数据: {file}"))
            }
            IoError::ImageEncode { path, message } => {
                ThError::image(format!("{path}: {message}"))
            }
            IoError::Foundation(th_err) => th_err,
        }
    }
}
