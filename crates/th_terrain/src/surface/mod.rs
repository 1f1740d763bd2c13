// crates/th_terrain/src/surface/mod.rs

//! 赛道高度曲面的各处理阶段
//!
//! 固定顺序：
//!
//! ```text
//! 投影采样点 ─> rasterize ─> widen ─> fill ─> amplify ─> 稠密栅格
//! ```
//!
//! - [`rasterize`]: 采样点写入带边距栅格
//! - [`widen`]: 赛道宽度扩展（读写分离）
//! - [`fill`]: 空白区域填充为地面高度
//! - [`amplify`]: 以最小值为锚点放大高差

pub mod amplify;
pub mod fill;
pub mod rasterize;
pub mod widen;

pub use amplify::amplify;
pub use fill::{fill_gaps, ground_level};
pub use rasterize::{rasterize, GridLayout, RasterStats};
pub use widen::{footprint_extent, widen};
