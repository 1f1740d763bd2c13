// crates/th_terrain/src/surface/amplify.rs

//! 高差放大
//!
//! 以栅格最小值为不动点做仿射变换：
//!
//! ```text
//! v' = (v - min) × factor + min
//! ```
//!
//! 最小值本身不变，其余值按倍数线性拉伸。不做截断，输出值可能很大。

use tracing::debug;

use crate::grid::HeightGrid;

/// 放大高差，返回锚点（变换前的最小值）
///
/// 未赋值单元不参与求最小值，也保持未赋值。全部未赋值时返回 None，栅格不变。
pub fn amplify(grid: &mut HeightGrid, factor: f64) -> Option<f64> {
    let anchor = grid.min_value()?;
    // (v - min) + min 在浮点下不一定精确等于 v
    if factor == 1.0 {
        return Some(anchor);
    }
    for v in grid.data_mut().iter_mut() {
        *v = (*v - anchor) * factor + anchor;
    }
    debug!("高差放大: 锚点 {:.4}, 倍数 {}", anchor, factor);
    Some(anchor)
}
