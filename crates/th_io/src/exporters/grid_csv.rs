// crates/th_io/src/exporters/grid_csv.rs
//! 栅格 CSV 导出器
//!
//! 每行一条记录，逗号分隔，末行同样以换行结尾。
//! 默认固定 4 位小数（与 `%.4f` 一致）；`full_precision()` 输出可无损读回的最短表示。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use th_terrain::HeightGrid;
use tracing::info;

use crate::error::IoResult;

/// 默认小数位数
const DEFAULT_PRECISION: usize = 4;

/// 栅格 CSV 导出器
#[derive(Debug, Clone)]
pub struct GridCsvExporter {
    /// `None` 表示最短无损表示
    precision: Option<usize>,
    delimiter: char,
}

impl Default for GridCsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GridCsvExporter {
    /// 创建新的导出器
    pub fn new() -> Self {
        Self {
            precision: Some(DEFAULT_PRECISION),
            delimiter: ',',
        }
    }

    /// 设置小数位数
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// 不做舍入，输出最短无损表示（整数值带 `.0`）
    pub fn full_precision(mut self) -> Self {
        self.precision = None;
        self
    }

    /// 设置分隔符
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// 导出到文件
    pub fn export(&self, path: impl AsRef<Path>, grid: &HeightGrid) -> IoResult<()> {
        let path = path.as_ref();
        let mut w = BufWriter::new(File::create(path)?);
        self.write_to(&mut w, grid)?;
        w.flush()?;
        info!(
            "栅格已保存: {} ({} × {})",
            path.display(),
            grid.rows(),
            grid.cols()
        );
        Ok(())
    }

    /// 写入任意输出流
    pub fn write_to<W: Write>(&self, w: &mut W, grid: &HeightGrid) -> IoResult<()> {
        for row in grid.iter_rows() {
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(w, "{}", self.delimiter)?;
                }
                match self.precision {
                    Some(precision) => write!(w, "{v:.precision$}")?,
                    None => write!(w, "{v:?}")?,
                }
            }
            writeln!(w)?;
        }
        Ok(())
    }

    /// 格式化为字符串
    pub fn to_string(&self, grid: &HeightGrid) -> IoResult<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, grid)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_decimals() {
        let grid = HeightGrid::from_rows(vec![vec![98.0, 122.0], vec![101.123456, -0.5]]).unwrap();
        let text = GridCsvExporter::new().to_string(&grid).unwrap();
        assert_eq!(text, "98.0000,122.0000\n101.1235,-0.5000\n");
    }

    #[test]
    fn test_custom_precision() {
        let grid = HeightGrid::from_rows(vec![vec![1.25, 2.0]]).unwrap();
        let text = GridCsvExporter::new()
            .precision(1)
            .delimiter(';')
            .to_string(&grid)
            .unwrap();
        assert_eq!(text, "1.2;2.0\n");
    }

    #[test]
    fn test_full_precision_reads_back_exactly() {
        let values = vec![vec![98.0, 101.123456789], vec![1.0 / 3.0, -0.000125]];
        let grid = HeightGrid::from_rows(values).unwrap();
        let text = GridCsvExporter::new().full_precision().to_string(&grid).unwrap();
        assert!(text.starts_with("98.0,101.123456789\n"));

        let back = crate::import::read_grid_csv(text.as_bytes(), "<str>").unwrap();
        assert_eq!(back, grid);
    }
}
