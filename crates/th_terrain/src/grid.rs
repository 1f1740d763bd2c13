// crates/th_terrain/src/grid.rs

//! 高度栅格
//!
//! 行优先存储的二维 f64 栅格，索引为 `[row, col]`。
//! 未赋值单元使用 NaN 哨兵（[`UNSET`]）。

use th_foundation::error::{ThError, ThResult};

/// 未赋值单元的哨兵值
pub const UNSET: f64 = f64::NAN;

/// 高度栅格
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl HeightGrid {
    /// 创建全部未赋值的栅格
    pub fn new_unset(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, UNSET)
    }

    /// 创建以常数填充的栅格
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// 从行优先数据创建
    pub fn from_data(data: Vec<f64>, rows: usize, cols: usize) -> ThResult<Self> {
        ThError::check_size("height grid", rows * cols, data.len())?;
        Ok(Self { data, rows, cols })
    }

    /// 从逐行数据创建，各行长度必须一致
    pub fn from_rows(rows: Vec<Vec<f64>>) -> ThResult<Self> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in rows {
            ThError::check_size("grid row", n_cols, row.len())?;
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// 行数
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 列数
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (行数, 列数)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// 单元总数
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 是否没有单元
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 获取单元值，越界返回 None
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// 设置单元值，越界时忽略
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if row < self.rows && col < self.cols {
            self.data[row * self.cols + col] = value;
        }
    }

    /// 单元是否已赋值（越界视为未赋值）
    #[inline]
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|v| !v.is_nan())
    }

    /// 行优先数据
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// 行优先数据（可变）
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// 第 `row` 行
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// 第 `row` 行（可变）
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [f64] {
        &mut self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// 逐行迭代
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.cols.max(1))
    }

    /// 已赋值单元数
    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|v| !v.is_nan()).count()
    }

    /// 未赋值单元数
    pub fn count_unset(&self) -> usize {
        self.len() - self.count_set()
    }

    /// 最小值（忽略未赋值单元），全部未赋值时返回 None
    pub fn min_value(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(f64::min)
    }

    /// 最大值（忽略未赋值单元），全部未赋值时返回 None
    pub fn max_value(&self) -> Option<f64> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_unset() {
        let grid = HeightGrid::new_unset(3, 4);
        assert_eq!(grid.shape(), (3, 4));
        assert_eq!(grid.count_set(), 0);
        assert_eq!(grid.count_unset(), 12);
        assert!(grid.min_value().is_none());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = HeightGrid::new_unset(2, 2);
        grid.set(1, 0, 5.0);
        grid.set(2, 0, 9.0);
        assert_eq!(grid.get(1, 0), Some(5.0));
        assert!(grid.is_set(1, 0));
        assert!(!grid.is_set(0, 0));
        assert!(grid.get(2, 0).is_none());
        assert_eq!(grid.count_set(), 1);
    }

    #[test]
    fn test_from_rows() {
        let grid = HeightGrid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(grid.shape(), (2, 2));
        assert_eq!(grid.row(1), &[3.0, 4.0]);
        assert_eq!(grid.min_value(), Some(1.0));
        assert_eq!(grid.max_value(), Some(4.0));
    }

    #[test]
    fn test_from_rows_ragged() {
        let result = HeightGrid::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(ThError::SizeMismatch { .. })));
    }

    #[test]
    fn test_from_data_size_mismatch() {
        assert!(HeightGrid::from_data(vec![0.0; 5], 2, 3).is_err());
    }

    #[test]
    fn test_min_ignores_unset() {
        let mut grid = HeightGrid::new_unset(2, 3);
        grid.set(0, 1, 7.0);
        grid.set(1, 2, -3.0);
        assert_eq!(grid.min_value(), Some(-3.0));
        assert_eq!(grid.max_value(), Some(7.0));
    }

    #[test]
    fn test_iter_rows() {
        let grid = HeightGrid::from_data((0..6).map(f64::from).collect(), 2, 3).unwrap();
        let rows: Vec<_> = grid.iter_rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[3.0, 4.0, 5.0]);
    }
}
