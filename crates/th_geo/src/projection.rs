// crates/th_geo/src/projection.rs

//! 局部平面投影
//!
//! 以采样集合的最小纬度/最小经度为原点，把经纬度换算为以米为单位的平面坐标。
//!
//! # 投影方式
//!
//! x、y 分别是两段独立的一维大圆距离：
//!
//! ```text
//! x = haversine(origin_lat, origin_lon, origin_lat, lon)
//! y = haversine(origin_lat, origin_lon, lat,        origin_lon)
//! ```
//!
//! 这不是正交投影（既非等距圆柱也非 UTM）。x 在原点纬度上量取，
//! 远离原点时会产生随纬度与场地范围增大的畸变。对于单条赛道尺度的数据，
//! 该近似足够，且输出与既有高度曲面保持一致。

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeoError, GeoResult};
use crate::geometry::{ElevationSample, GeoPoint};

/// 投影后的采样点
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSample {
    /// 东向距离（米，≥ 0）
    pub x: f64,
    /// 北向距离（米，≥ 0）
    pub y: f64,
    /// 高程（米）
    pub elevation: f64,
}

/// 局部平面投影器
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalProjector {
    origin: GeoPoint,
}

impl LocalProjector {
    /// 以指定原点创建
    #[must_use]
    pub fn new(origin: GeoPoint) -> Self {
        Self { origin }
    }

    /// 以采样集合的 (最小纬度, 最小经度) 为原点创建
    ///
    /// # 错误
    ///
    /// - 采样集合为空
    /// - 纬度超出 [-90, 90] 或经度超出 [-180, 180]
    /// - 高程不是有限数
    pub fn from_samples(samples: &[ElevationSample]) -> GeoResult<Self> {
        if samples.is_empty() {
            return Err(GeoError::EmptySamples);
        }
        validate_samples(samples)?;

        let (min_lat, min_lon) = samples.iter().fold(
            (f64::INFINITY, f64::INFINITY),
            |(lat, lon), s| (lat.min(s.lat), lon.min(s.lon)),
        );
        let origin = GeoPoint::new(min_lat, min_lon);
        debug!("投影原点: lat={:.7}, lon={:.7}", origin.lat, origin.lon);

        Ok(Self::new(origin))
    }

    /// 投影原点
    #[inline]
    #[must_use]
    pub fn origin(&self) -> GeoPoint {
        self.origin
    }

    /// 投影单点，返回 (x, y) 米
    #[must_use]
    pub fn project(&self, point: GeoPoint) -> (f64, f64) {
        let along_lon = GeoPoint::new(self.origin.lat, point.lon);
        let along_lat = GeoPoint::new(point.lat, self.origin.lon);
        let x = self.origin.great_circle_distance_to(&along_lon);
        let y = self.origin.great_circle_distance_to(&along_lat);
        (x, y)
    }

    /// 投影采样点
    #[must_use]
    pub fn project_sample(&self, sample: &ElevationSample) -> ProjectedSample {
        let (x, y) = self.project(sample.position());
        ProjectedSample {
            x,
            y,
            elevation: sample.elevation,
        }
    }

    /// 批量投影，保持输入顺序
    #[must_use]
    pub fn project_all(&self, samples: &[ElevationSample]) -> Vec<ProjectedSample> {
        samples.iter().map(|s| self.project_sample(s)).collect()
    }
}

fn validate_samples(samples: &[ElevationSample]) -> GeoResult<()> {
    for (index, s) in samples.iter().enumerate() {
        if !(-90.0..=90.0).contains(&s.lat) {
            return Err(GeoError::CoordinateOutOfRange {
                index,
                coord_type: "纬度",
                value: s.lat,
                min: -90.0,
                max: 90.0,
            });
        }
        if !(-180.0..=180.0).contains(&s.lon) {
            return Err(GeoError::CoordinateOutOfRange {
                index,
                coord_type: "经度",
                value: s.lon,
                min: -180.0,
                max: 180.0,
            });
        }
        if !s.elevation.is_finite() {
            return Err(GeoError::InvalidElevation {
                index,
                value: s.elevation,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_min_lat_min_lon() {
        let samples = vec![
            ElevationSample::new(39.80, -86.20, 220.0),
            ElevationSample::new(39.79, -86.22, 221.0),
            ElevationSample::new(39.81, -86.23, 219.0),
        ];
        let proj = LocalProjector::from_samples(&samples).unwrap();
        assert_eq!(proj.origin(), GeoPoint::new(39.79, -86.23));
    }

    #[test]
    fn test_origin_projects_to_zero() {
        for (lat, lon) in [(0.0, 0.0), (39.79, -86.23), (-45.0, 170.0), (89.9, -179.9)] {
            let proj = LocalProjector::new(GeoPoint::new(lat, lon));
            let (x, y) = proj.project(GeoPoint::new(lat, lon));
            assert!(x.abs() < 1e-9 && y.abs() < 1e-9, "({lat}, {lon}) -> ({x}, {y})");
        }
    }

    #[test]
    fn test_equator_pair() {
        let samples = vec![
            ElevationSample::new(0.0, 0.0, 100.0),
            ElevationSample::new(0.0, 0.001, 110.0),
        ];
        let proj = LocalProjector::from_samples(&samples).unwrap();
        let projected = proj.project_all(&samples);

        assert!(projected[0].x.abs() < 1e-9);
        assert!((projected[1].x - 111.19).abs() < 0.01);
        assert!(projected.iter().all(|p| p.y.abs() < 1e-9));
        assert_eq!(projected[1].elevation, 110.0);
    }

    #[test]
    fn test_axes_are_independent() {
        // y 只取决于纬度，x 只取决于经度
        let proj = LocalProjector::new(GeoPoint::new(39.79, -86.23));
        let (x1, y1) = proj.project(GeoPoint::new(39.80, -86.22));
        let (x2, y2) = proj.project(GeoPoint::new(39.85, -86.22));
        let (x3, y3) = proj.project(GeoPoint::new(39.80, -86.21));
        assert!((x1 - x2).abs() < 1e-9);
        assert!((y1 - y3).abs() < 1e-9);
        assert!(y2 > y1);
        assert!(x3 > x1);
    }

    #[test]
    fn test_single_sample_is_valid() {
        let samples = vec![ElevationSample::new(12.0, 34.0, 5.0)];
        let proj = LocalProjector::from_samples(&samples).unwrap();
        let p = proj.project_sample(&samples[0]);
        assert!(p.x.abs() < 1e-9 && p.y.abs() < 1e-9);
    }

    #[test]
    fn test_empty_samples_rejected() {
        assert_eq!(LocalProjector::from_samples(&[]), Err(GeoError::EmptySamples));
    }

    #[test]
    fn test_invalid_coordinates_rejected() {
        let bad_lat = vec![ElevationSample::new(95.0, 0.0, 1.0)];
        assert!(matches!(
            LocalProjector::from_samples(&bad_lat),
            Err(GeoError::CoordinateOutOfRange { coord_type: "纬度", .. })
        ));

        let bad_elev = vec![
            ElevationSample::new(0.0, 0.0, 1.0),
            ElevationSample::new(0.0, 0.0, f64::NAN),
        ];
        assert!(matches!(
            LocalProjector::from_samples(&bad_elev),
            Err(GeoError::InvalidElevation { index: 1, .. })
        ));
    }
}
