// crates/th_terrain/src/builder.rs

//! 赛道曲面构建器
//!
//! 串联投影、栅格化、宽度扩展、空白填充、高差放大五个阶段，
//! 每个阶段消费上一阶段的完整栅格后再交给下一阶段。
//!
//! # 示例
//!
//! ```
//! use th_config::SurfaceConfig;
//! use th_geo::ElevationSample;
//! use th_terrain::SurfaceBuilder;
//!
//! let samples = vec![
//!     ElevationSample::new(0.0, 0.0, 100.0),
//!     ElevationSample::new(0.0, 0.001, 110.0),
//! ];
//! let config = SurfaceConfig::default().with_track_width(2).with_amplification(2.0);
//! let surface = SurfaceBuilder::new(config).build(&samples).unwrap();
//!
//! assert_eq!(surface.ground_level, 98.0);
//! assert_eq!(surface.grid.max_value(), Some(122.0));
//! ```

use std::time::Instant;

use th_config::SurfaceConfig;
use th_foundation::error::{ThError, ThResult};
use th_geo::{ElevationSample, GeoPoint, LocalProjector, ProjectedSample};
use tracing::{info, warn};

use crate::grid::HeightGrid;
use crate::surface::{amplify, fill_gaps, ground_level, rasterize, widen, GridLayout, RasterStats};

/// 曲面构建结果
#[derive(Debug, Clone)]
pub struct TrackSurface {
    /// 最终稠密栅格
    pub grid: HeightGrid,
    /// 栅格布局
    pub layout: GridLayout,
    /// 投影原点
    pub origin: GeoPoint,
    /// 投影后的采样点（与输入顺序一致）
    pub projected: Vec<ProjectedSample>,
    /// 栅格化统计
    pub raster_stats: RasterStats,
    /// 地面高度（填充值）
    pub ground_level: f64,
    /// 放大锚点（放大前的栅格最小值）
    pub anchor: f64,
}

/// 赛道曲面构建器
pub struct SurfaceBuilder {
    config: SurfaceConfig,
}

impl SurfaceBuilder {
    /// 创建新的构建器
    pub fn new(config: SurfaceConfig) -> Self {
        Self { config }
    }

    /// 当前配置
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// 构建稠密高度栅格
    ///
    /// # 错误
    ///
    /// - 配置无效
    /// - 采样集合为空或坐标越界
    pub fn build(&self, samples: &[ElevationSample]) -> ThResult<TrackSurface> {
        self.config.validate()?;
        let start = Instant::now();
        let cfg = &self.config;

        // 投影
        let projector = LocalProjector::from_samples(samples)?;
        let projected = projector.project_all(samples);
        let origin = projector.origin();
        info!(
            "投影完成: {} 个采样点, 原点 ({:.7}, {:.7})",
            projected.len(),
            origin.lat,
            origin.lon
        );

        // 栅格化
        let layout = GridLayout::for_samples(&projected, cfg.margin_rows, cfg.margin_cols);
        let mut grid = layout.allocate();
        let raster_stats = rasterize(&projected, &layout, &mut grid);
        if raster_stats.overwritten > 0 {
            warn!(
                "{} 个采样点与先前采样点落在同一单元，保留后写入的高程",
                raster_stats.overwritten
            );
        }
        info!(
            "栅格化完成: {} × {} 单元, 已赋值 {}",
            layout.rows,
            layout.cols,
            grid.count_set()
        );

        // 赛道宽度
        let mut grid = widen(&grid, cfg.track_width);
        info!(
            "赛道扩展完成: 宽度 {}, 已赋值 {}",
            cfg.track_width,
            grid.count_set()
        );

        // 空白填充
        let floor = ground_level(samples.iter().map(|s| s.elevation), cfg.ground_tolerance)?;
        let filled = fill_gaps(&mut grid, floor);
        info!("空白填充完成: {} 个单元设为 {:.4} m", filled, floor);

        // 高差放大
        let anchor = amplify(&mut grid, cfg.height_amplification_factor)
            .ok_or_else(|| ThError::invalid_input("栅格为空，无法放大高差"))?;
        info!(
            "高差放大完成: 倍数 {}, 锚点 {:.4} m, 最高 {:.4} m, 耗时 {:.2?}",
            cfg.height_amplification_factor,
            anchor,
            grid.max_value().unwrap_or(anchor),
            start.elapsed()
        );

        Ok(TrackSurface {
            grid,
            layout,
            origin,
            projected,
            raster_stats,
            ground_level: floor,
            anchor,
        })
    }
}
