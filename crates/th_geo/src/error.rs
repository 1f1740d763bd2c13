// crates/th_geo/src/error.rs
//! 地理坐标处理错误类型
//!
//! 包含采样点校验与局部投影相关的错误。
//! 所有错误可转换为 `th_foundation::ThError` 向上传播。

use th_foundation::ThError;
use thiserror::Error;

/// Geo 模块结果类型
pub type GeoResult<T> = Result<T, GeoError>;

/// 地理坐标处理错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// 采样点集合为空，无法确定投影原点
    #[error("采样点集合为空，无法确定投影原点")]
    EmptySamples,

    /// 坐标超出有效范围
    #[error("第{index}个采样点 {coord_type} 超出范围: {value:.6} (允许范围: {min} 到 {max})")]
    CoordinateOutOfRange {
        /// 采样点序号（从 0 开始）
        index: usize,
        /// 坐标类型（"纬度"、"经度"）
        coord_type: &'static str,
        /// 实际值
        value: f64,
        /// 最小允许值
        min: f64,
        /// 最大允许值
        max: f64,
    },

    /// 高程不是有限数
    #[error("第{index}个采样点高程无效: {value}")]
    InvalidElevation {
        /// 采样点序号（从 0 开始）
        index: usize,
        /// 实际值
        value: f64,
    },
}

impl From<GeoError> for ThError {
    fn from(err: GeoError) -> Self {
        match err {
            GeoError::EmptySamples => ThError::invalid_input(err.to_string()),
            GeoError::CoordinateOutOfRange { .. } | GeoError::InvalidElevation { .. } => {
                ThError::projection(err.to_string())
            }
        }
    }
}
