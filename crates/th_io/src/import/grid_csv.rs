// crates/th_io/src/import/grid_csv.rs

//! 栅格 CSV 导入
//!
//! 读取无表头、逗号分隔的数值矩阵（曲面导出的格式），还原为 `HeightGrid`。

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use th_foundation::ThError;
use th_terrain::HeightGrid;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// 从文件加载栅格
pub fn load_grid_csv(path: &Path) -> IoResult<HeightGrid> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::Foundation(ThError::file_not_found(path))
        } else {
            IoError::Foundation(ThError::io_with_source(
                format!("无法打开 {}", path.display()),
                e,
            ))
        }
    })?;
    let grid = read_grid_csv(BufReader::new(file), &path.display().to_string())?;
    debug!("读取栅格: {} × {}, 来自 {}", grid.rows(), grid.cols(), path.display());
    Ok(grid)
}

/// 从任意读取器解析栅格，各行列数必须一致
pub fn read_grid_csv<R: Read>(reader: R, source: &str) -> IoResult<HeightGrid> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut data = Vec::new();
    let mut cols = None;
    let mut rows = 0usize;

    for (row_idx, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| IoError::parse(source, row_idx + 1, e.to_string()))?;
        let line = record.position().map_or(row_idx + 1, |p| p.line() as usize);

        let expected = *cols.get_or_insert(record.len());
        if record.len() != expected {
            return Err(IoError::parse(
                source,
                line,
                format!("列数不一致: 期望 {expected}, 实际 {}", record.len()),
            ));
        }

        for raw in record.iter() {
            let value: f64 = raw
                .parse()
                .map_err(|_| IoError::parse(source, line, format!("数值无法解析: '{raw}'")))?;
            data.push(value);
        }
        rows += 1;
    }

    let cols = cols.ok_or_else(|| IoError::EmptyInput {
        file: source.to_string(),
    })?;
    Ok(HeightGrid::from_data(data, rows, cols)?)
}
