// crates/th_geo/src/geometry.rs

//! 几何类型定义
//!
//! 提供经纬度点、带高程的采样点，以及大圆距离计算。
//!
//! # 距离计算
//!
//! - `great_circle_distance_to`: Haversine 公式（球体半径 6,371,000 m）
//! - `haversine_distance`: 可自定义球体半径的 Haversine 公式

use serde::{Deserialize, Serialize};

// ============================================================================
// 地球物理常量
// ============================================================================

/// 地球半径 (米) - 用于 Haversine 公式
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// 大圆距离（米），输入为十进制度
///
/// 对称且非负：`haversine(a, b) == haversine(b, a)`。
#[inline]
#[must_use]
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    GeoPoint::new(lat1, lon1).great_circle_distance_to(&GeoPoint::new(lat2, lon2))
}

// ============================================================================
// GeoPoint - 经纬度点
// ============================================================================

/// 经纬度点（十进制度）
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// 纬度
    pub lat: f64,
    /// 经度
    pub lon: f64,
}

impl GeoPoint {
    /// 创建新点
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine 公式计算大圆距离
    ///
    /// 将地球视为正球体。
    ///
    /// # Returns
    /// 大圆距离（米）
    #[must_use]
    pub fn great_circle_distance_to(&self, other: &Self) -> f64 {
        self.haversine_distance(other, EARTH_RADIUS)
    }

    /// Haversine 公式（可自定义球体半径）
    #[must_use]
    pub fn haversine_distance(&self, other: &Self, radius: f64) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

        // 舍入误差可能使 a 略大于 1
        let c = 2.0 * a.min(1.0).sqrt().asin();

        radius * c
    }
}

// ============================================================================
// ElevationSample - 采样点
// ============================================================================

/// 带高程的采样点
///
/// 输入记录，身份由其在集合中的位置决定。
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElevationSample {
    /// 纬度（度）
    pub lat: f64,
    /// 经度（度）
    pub lon: f64,
    /// 高程（米）
    pub elevation: f64,
}

impl ElevationSample {
    /// 创建采样点
    #[inline]
    #[must_use]
    pub const fn new(lat: f64, lon: f64, elevation: f64) -> Self {
        Self { lat, lon, elevation }
    }

    /// 采样点位置
    #[inline]
    #[must_use]
    pub const fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}
