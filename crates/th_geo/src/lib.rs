// crates/th_geo/src/lib.rs
//! TrackHeight 地理坐标处理模块
//!
//! 提供经纬度采样点、Haversine 大圆距离，以及把采样点换算为局部米制平面坐标的投影器。
//!
//! # 模块
//!
//! - `geometry`: 几何类型 (GeoPoint, ElevationSample) 与 Haversine 距离
//! - `projection`: 局部平面投影 (LocalProjector, ProjectedSample)
//! - `error`: 错误类型
//!
//! # 示例
//!
//! ```
//! use th_geo::prelude::*;
//!
//! let samples = vec![
//!     ElevationSample::new(0.0, 0.0, 100.0),
//!     ElevationSample::new(0.0, 0.001, 110.0),
//! ];
//! let proj = LocalProjector::from_samples(&samples).unwrap();
//! let projected = proj.project_all(&samples);
//! assert!((projected[1].x - 111.19).abs() < 0.01);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod geometry;
pub mod projection;

/// 预导入模块
pub mod prelude {
    pub use crate::error::{GeoError, GeoResult};
    pub use crate::geometry::{haversine, ElevationSample, GeoPoint, EARTH_RADIUS};
    pub use crate::projection::{LocalProjector, ProjectedSample};
}

// 重导出常用类型
pub use error::{GeoError, GeoResult};
pub use geometry::{haversine, ElevationSample, GeoPoint, EARTH_RADIUS};
pub use projection::{LocalProjector, ProjectedSample};
