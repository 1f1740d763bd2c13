// crates/th_terrain/src/lib.rs

//! 赛道高度曲面
//!
//! 把稀疏的经纬度高程采样点转换为稠密的二维高度栅格，供网格/高度图生成使用。
//!
//! # 模块
//!
//! - `grid`: 高度栅格 (NaN 表示未赋值)
//! - `surface`: 栅格化、赛道宽度扩展、空白填充、高差放大
//! - `builder`: 完整流水线
//! - `downsample`: 块平均降采样

pub mod builder;
pub mod downsample;
pub mod grid;
pub mod surface;

// 重导出常用类型
pub use builder::{SurfaceBuilder, TrackSurface};
pub use downsample::downsample_mean;
pub use grid::{HeightGrid, UNSET};
pub use surface::{GridLayout, RasterStats};
