// crates/th_terrain/src/downsample.rs

//! 块平均降采样
//!
//! 把栅格划分为 `factor × factor` 的不重叠块，每块取算术平均。
//! 输出尺寸为 `ceil(rows/factor) × ceil(cols/factor)`，
//! 边缘不完整的块只对实际存在的单元求平均。

use th_foundation::error::{ThError, ThResult};
use tracing::debug;

use crate::grid::HeightGrid;

/// 块平均降采样
///
/// # 错误
///
/// `factor == 0` 时返回 `InvalidConfig`。
pub fn downsample_mean(grid: &HeightGrid, factor: usize) -> ThResult<HeightGrid> {
    if factor == 0 {
        return Err(ThError::invalid_config(
            "downsample_factor",
            "0",
            "降采样块边长必须 ≥ 1",
        ));
    }

    let (rows, cols) = grid.shape();
    let out_rows = rows.div_ceil(factor);
    let out_cols = cols.div_ceil(factor);
    let mut out = HeightGrid::filled(out_rows, out_cols, 0.0);

    for i in 0..out_rows {
        let row_start = i * factor;
        let row_end = ((i + 1) * factor).min(rows);
        for j in 0..out_cols {
            let col_start = j * factor;
            let col_end = ((j + 1) * factor).min(cols);

            let sum: f64 = (row_start..row_end)
                .map(|r| grid.row(r)[col_start..col_end].iter().sum::<f64>())
                .sum();
            let count = (row_end - row_start) * (col_end - col_start);
            out.set(i, j, sum / count as f64);
        }
    }

    debug!(
        "降采样: {} × {} -> {} × {} (块边长 {})",
        rows, cols, out_rows, out_cols, factor
    );
    Ok(out)
}
