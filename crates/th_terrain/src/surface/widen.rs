// crates/th_terrain/src/surface/widen.rs

//! 赛道宽度扩展
//!
//! 每个已赋值单元把自身高度写入以它为基准的方形邻域，模拟赛道的物理宽度。
//! 邻域偏移为 `[-⌈w/2⌉, ⌊w/2⌋]`（下界向负无穷取整），
//! 因此奇数宽度时足迹向上、向左多出一格：宽度 1 覆盖 2×2，宽度 3 覆盖 4×4。
//!
//! # 读写分离
//!
//! 只从源栅格读取，只向新栅格写入。相邻足迹的重叠不会级联扩散；
//! 重叠区域的取值由处理顺序决定（按行优先扫描源栅格，后处理者覆盖先处理者）。
//!
//! 写入量为 O(P·W²)，P 为已赋值单元数，W 为足迹边长。

use tracing::debug;

use crate::grid::HeightGrid;

/// 足迹范围 `(before, after)`：源单元之前 `⌈w/2⌉` 格，之后 `⌊w/2⌋` 格
#[inline]
pub fn footprint_extent(track_width: usize) -> (usize, usize) {
    (track_width.div_ceil(2), track_width / 2)
}

/// 扩展赛道宽度，返回新栅格
///
/// 对每个已赋值源单元 `(y, x)`，写入全部 `(y+i, x+j)`，
/// 其中 `i, j ∈ [-⌈w/2⌉, ⌊w/2⌋]`，超出边界的部分被裁剪。
/// `track_width = 0` 时等价于复制。
pub fn widen(source: &HeightGrid, track_width: usize) -> HeightGrid {
    let (rows, cols) = source.shape();
    let (before, after) = footprint_extent(track_width);
    let mut widened = HeightGrid::new_unset(rows, cols);
    let mut footprints = 0usize;

    for y in 0..rows {
        let row_start = y.saturating_sub(before);
        let row_end = (y + after).min(rows - 1);

        for (x, &value) in source.row(y).iter().enumerate() {
            if value.is_nan() {
                continue;
            }
            let col_start = x.saturating_sub(before);
            let col_end = (x + after).min(cols - 1);

            for r in row_start..=row_end {
                widened.row_mut(r)[col_start..=col_end].fill(value);
            }
            footprints += 1;
        }
    }

    debug!(
        "赛道扩展: 足迹 {} 个, 偏移 [-{}, {}], 覆盖单元 {}",
        footprints,
        before,
        after,
        widened.count_set()
    );
    widened
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_point(rows: usize, cols: usize, row: usize, col: usize, value: f64) -> HeightGrid {
        let mut grid = HeightGrid::new_unset(rows, cols);
        grid.set(row, col, value);
        grid
    }

    #[test]
    fn test_zero_width_is_identity() {
        let mut grid = HeightGrid::new_unset(5, 6);
        grid.set(1, 2, 10.0);
        grid.set(4, 5, 20.0);
        let widened = widen(&grid, 0);

        for row in 0..5 {
            for col in 0..6 {
                let a = grid.get(row, col).unwrap();
                let b = widened.get(row, col).unwrap();
                assert!(a == b || (a.is_nan() && b.is_nan()));
            }
        }
    }

    #[test]
    fn test_extent() {
        assert_eq!(footprint_extent(0), (0, 0));
        assert_eq!(footprint_extent(1), (1, 0));
        assert_eq!(footprint_extent(3), (2, 1));
        assert_eq!(footprint_extent(60), (30, 30));
        assert_eq!(footprint_extent(61), (31, 30));
    }

    #[test]
    fn test_width_one_covers_two_by_two() {
        let grid = single_point(5, 5, 2, 2, 4.0);
        let widened = widen(&grid, 1);
        assert_eq!(widened.count_set(), 4);
        for row in 1..=2 {
            for col in 1..=2 {
                assert_eq!(widened.get(row, col), Some(4.0));
            }
        }
        assert!(!widened.is_set(3, 2));
        assert!(!widened.is_set(2, 3));
    }

    #[test]
    fn test_width_three_covers_four_by_four() {
        let grid = single_point(8, 8, 4, 4, 9.0);
        let widened = widen(&grid, 3);
        assert_eq!(widened.count_set(), 16);
        for row in 2..=5 {
            for col in 2..=5 {
                assert_eq!(widened.get(row, col), Some(9.0));
            }
        }
        assert!(!widened.is_set(1, 4));
        assert!(!widened.is_set(4, 6));
    }

    #[test]
    fn test_odd_width_counts_match_floor_range() {
        // 偏移 [-⌈w/2⌉, ⌊w/2⌋] 的边长为 w + 1
        for (width, expected) in [(1, 4), (3, 16), (61, 3844)] {
            let grid = single_point(80, 80, 40, 40, 1.0);
            assert_eq!(widen(&grid, width).count_set(), expected, "width {width}");
        }
    }

    #[test]
    fn test_square_footprint() {
        let grid = single_point(9, 9, 4, 4, 7.0);
        let widened = widen(&grid, 4);

        assert_eq!(widened.count_set(), 25);
        for row in 2..=6 {
            for col in 2..=6 {
                assert_eq!(widened.get(row, col), Some(7.0));
            }
        }
        assert!(!widened.is_set(1, 4));
        assert!(!widened.is_set(4, 7));
    }

    #[test]
    fn test_clipped_at_bounds() {
        let grid = single_point(4, 4, 0, 0, 1.0);
        let widened = widen(&grid, 4);
        // 行 0..=2, 列 0..=2
        assert_eq!(widened.count_set(), 9);
        assert!(widened.is_set(2, 2));
        assert!(!widened.is_set(3, 0));
    }

    #[test]
    fn test_reads_only_source() {
        // 若原地扩散，右侧单元会继续向右传播
        let grid = single_point(1, 10, 0, 0, 3.0);
        let widened = widen(&grid, 2);
        assert_eq!(widened.count_set(), 2);
        assert!(!widened.is_set(0, 2));
    }

    #[test]
    fn test_overlap_last_processed_wins() {
        let mut grid = HeightGrid::new_unset(1, 6);
        grid.set(0, 2, 100.0);
        grid.set(0, 3, 110.0);
        let widened = widen(&grid, 2);

        // (0,3) 在行优先扫描中后处理，覆盖 (0,2) 的足迹
        assert_eq!(widened.get(0, 1), Some(100.0));
        assert_eq!(widened.get(0, 2), Some(110.0));
        assert_eq!(widened.get(0, 3), Some(110.0));
        assert_eq!(widened.get(0, 4), Some(110.0));
        assert!(!widened.is_set(0, 5));
    }

    #[test]
    fn test_row_major_order_across_rows() {
        let mut grid = HeightGrid::new_unset(3, 3);
        grid.set(0, 2, 1.0);
        grid.set(1, 0, 2.0);
        let widened = widen(&grid, 2);
        // (1,1) 被两个足迹覆盖，第 1 行的源单元后处理
        assert_eq!(widened.get(1, 1), Some(2.0));
        // (0,2) 仅在第一个足迹内
        assert!(widened.get(0, 2) == Some(1.0));
    }

    #[test]
    fn test_empty_source_stays_unset() {
        let grid = HeightGrid::new_unset(4, 4);
        assert_eq!(widen(&grid, 60).count_set(), 0);
    }
}
