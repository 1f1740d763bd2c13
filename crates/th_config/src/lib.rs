// crates/th_config/src/lib.rs

//! TrackHeight Config Layer
//!
//! 配置层，提供曲面生成与下游导出所需的全部可调参数。
//!
//! # 模块概览
//!
//! - [`surface_config`]: SurfaceConfig 曲面配置（JSON 加载/保存/验证）
//! - [`error`]: 配置错误类型

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod surface_config;

// 重导出核心类型
pub use error::ConfigError;
pub use surface_config::{InputColumns, SurfaceConfig};
