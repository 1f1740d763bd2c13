// crates/th_terrain/src/surface/rasterize.rs

//! 采样点栅格化
//!
//! 把投影后的采样点写入带边距的栅格。单元 `(row, col)` 对应的物理位置为
//! `(col - margin_cols/2, row - margin_rows/2)` 米。

use th_geo::ProjectedSample;
use tracing::debug;

use crate::grid::HeightGrid;

/// 栅格布局：边距与尺寸
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// 行数
    pub rows: usize,
    /// 列数
    pub cols: usize,
    /// 额外边距行数
    pub margin_rows: usize,
    /// 额外边距列数
    pub margin_cols: usize,
}

impl GridLayout {
    /// 由投影范围确定尺寸：`(max_y + 1 + margin_rows) × (max_x + 1 + margin_cols)`
    ///
    /// `max_x`、`max_y` 为最大投影坐标截断后的整数。空集合得到只含边距的布局。
    pub fn for_samples(samples: &[ProjectedSample], margin_rows: usize, margin_cols: usize) -> Self {
        let (max_x, max_y) = samples.iter().fold((0usize, 0usize), |(mx, my), s| {
            (mx.max(s.x as usize), my.max(s.y as usize))
        });
        Self {
            rows: max_y + 1 + margin_rows,
            cols: max_x + 1 + margin_cols,
            margin_rows,
            margin_cols,
        }
    }

    /// 行偏移（上边距）
    #[inline]
    pub fn row_offset(&self) -> usize {
        self.margin_rows / 2
    }

    /// 列偏移（左边距）
    #[inline]
    pub fn col_offset(&self) -> usize {
        self.margin_cols / 2
    }

    /// 采样点所在单元 (row, col)，坐标截断取整
    #[inline]
    pub fn cell_of(&self, sample: &ProjectedSample) -> (usize, usize) {
        (
            sample.y as usize + self.row_offset(),
            sample.x as usize + self.col_offset(),
        )
    }

    /// 单元对应的物理位置 (x, y) 米
    #[inline]
    pub fn position_of(&self, row: usize, col: usize) -> (f64, f64) {
        (
            col as f64 - self.col_offset() as f64,
            row as f64 - self.row_offset() as f64,
        )
    }

    /// 分配全部未赋值的栅格
    pub fn allocate(&self) -> HeightGrid {
        HeightGrid::new_unset(self.rows, self.cols)
    }
}

/// 栅格化统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterStats {
    /// 写入次数
    pub written: usize,
    /// 覆盖已有值的次数（多个采样点截断到同一单元）
    pub overwritten: usize,
    /// 落在栅格之外被忽略的采样点数
    pub clipped: usize,
}

/// 将采样点高程写入栅格
///
/// 按输入顺序写入，同一单元后写覆盖先写，不做平均。
pub fn rasterize(samples: &[ProjectedSample], layout: &GridLayout, grid: &mut HeightGrid) -> RasterStats {
    let mut stats = RasterStats::default();

    for sample in samples {
        let (row, col) = layout.cell_of(sample);
        if row >= grid.rows() || col >= grid.cols() {
            stats.clipped += 1;
            continue;
        }
        if grid.is_set(row, col) {
            stats.overwritten += 1;
        }
        grid.set(row, col, sample.elevation);
        stats.written += 1;
    }

    debug!(
        "栅格化: 写入 {}, 覆盖 {}, 越界 {}",
        stats.written, stats.overwritten, stats.clipped
    );
    stats
}
