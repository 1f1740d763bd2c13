// crates/th_foundation/src/lib.rs

//! TrackHeight Foundation Layer
//!
//! 基础层，提供整个项目共享的错误类型。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型 `ThError` / `ThResult`
//!
//! # 层级架构
//!
//! ```text
//! th_cli        ─> 命令行
//! th_io         ─> CSV / PNG / ListModel
//! th_terrain    ─> HeightGrid 与曲面生成流水线
//! th_geo        ─> 经纬度、Haversine、局部投影
//! th_config     ─> SurfaceConfig
//! th_foundation ─> ThError (本层)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{ThError, ThResult};
