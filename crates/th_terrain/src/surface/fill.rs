// crates/th_terrain/src/surface/fill.rs

//! 空白区域填充
//!
//! 无赛道数据的单元统一设为地面高度 `min(采样高程) - ground_tolerance`，
//! 使赛道表面相对周围略微凸起。填充后栅格不再含未赋值单元。

use th_foundation::error::{ThError, ThResult};
use tracing::debug;

use crate::grid::HeightGrid;

/// 计算地面高度：最低采样高程减去容差
///
/// # 错误
///
/// 高程集合为空时返回 `InvalidInput`。
pub fn ground_level<I>(elevations: I, ground_tolerance: f64) -> ThResult<f64>
where
    I: IntoIterator<Item = f64>,
{
    let min_elevation = elevations
        .into_iter()
        .reduce(f64::min)
        .ok_or_else(|| ThError::invalid_input("无法计算地面高度: 高程集合为空"))?;
    Ok(min_elevation - ground_tolerance)
}

/// 用 `floor` 填充全部未赋值单元，返回填充数量
pub fn fill_gaps(grid: &mut HeightGrid, floor: f64) -> usize {
    let mut filled = 0;
    for v in grid.data_mut().iter_mut().filter(|v| v.is_nan()) {
        *v = floor;
        filled += 1;
    }
    debug!("空白填充: {} 个单元, 地面高度 {:.4}", filled, floor);
    filled
}
