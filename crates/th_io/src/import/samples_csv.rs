// crates/th_io/src/import/samples_csv.rs

//! CSV 采样点导入
//!
//! 读取带表头的测量表，按列名（不区分大小写）或列索引取出纬度、经度、高程。
//! 多余的列被忽略。任何无法解析的行都会使导入失败。
//!
//! 支持格式示例：
//! ```csv
//! Time,Latitude,Longitude,Metres above sea level
//! 0.0,39.7931,-86.2389,221.4
//! 0.1,39.7932,-86.2388,221.5
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use th_config::InputColumns;
use th_foundation::ThError;
use th_geo::ElevationSample;
use tracing::info;

use crate::error::{IoError, IoResult};

/// 列引用方式
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnRef {
    /// 按列名引用
    Name(String),
    /// 按索引引用（从0开始）
    Index(usize),
}

/// CSV 采样点配置
#[derive(Debug, Clone)]
pub struct SampleCsvConfig {
    /// 纬度列
    pub latitude: ColumnRef,
    /// 经度列
    pub longitude: ColumnRef,
    /// 高程列
    pub elevation: ColumnRef,
    /// 是否有表头
    pub has_header: bool,
    /// 分隔符
    pub delimiter: u8,
}

impl Default for SampleCsvConfig {
    fn default() -> Self {
        Self::from(&InputColumns::default())
    }
}

impl From<&InputColumns> for SampleCsvConfig {
    fn from(columns: &InputColumns) -> Self {
        Self {
            latitude: ColumnRef::Name(columns.latitude_column.clone()),
            longitude: ColumnRef::Name(columns.longitude_column.clone()),
            elevation: ColumnRef::Name(columns.elevation_column.clone()),
            has_header: true,
            // 配置层已保证分隔符为 ASCII
            delimiter: columns.delimiter as u8,
        }
    }
}

impl SampleCsvConfig {
    /// 按列索引读取无表头文件
    pub fn by_index(latitude: usize, longitude: usize, elevation: usize) -> Self {
        Self {
            latitude: ColumnRef::Index(latitude),
            longitude: ColumnRef::Index(longitude),
            elevation: ColumnRef::Index(elevation),
            has_header: false,
            delimiter: b',',
        }
    }
}

/// 从文件加载采样点
pub fn load_samples(path: &Path, config: &SampleCsvConfig) -> IoResult<Vec<ElevationSample>> {
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
    let samples = read_samples(BufReader::new(file), config, &path.display().to_string())?;
    info!("读取采样点: {} 条, 来自 {}", samples.len(), path.display());
    Ok(samples)
}

/// 从任意读取器解析采样点
///
/// `source` 仅用于错误信息。
pub fn read_samples<R: Read>(
    reader: R,
    config: &SampleCsvConfig,
    source: &str,
) -> IoResult<Vec<ElevationSample>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(config.has_header)
        .delimiter(config.delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let (lat_idx, lon_idx, elev_idx) = if config.has_header {
        let headers = csv_reader
            .headers()
            .map_err(|e| IoError::parse(source, 1, format!("无法读取表头: {e}")))?
            .clone();
        (
            resolve_column(&config.latitude, &headers, source)?,
            resolve_column(&config.longitude, &headers, source)?,
            resolve_column(&config.elevation, &headers, source)?,
        )
    } else {
        match (&config.latitude, &config.longitude, &config.elevation) {
            (ColumnRef::Index(a), ColumnRef::Index(b), ColumnRef::Index(c)) => (*a, *b, *c),
            _ => {
                return Err(IoError::Foundation(ThError::invalid_config(
                    "input.columns",
                    "name",
                    "无表头文件只能按索引引用列",
                )))
            }
        }
    };

    let mut samples = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let fallback_line = row_idx + 1 + usize::from(config.has_header);
        let record = result.map_err(|e| IoError::parse(source, fallback_line, e.to_string()))?;
        let line = record
            .position()
            .map_or(fallback_line, |p| p.line() as usize);

        // 跳过空行
        if record.iter().all(str::is_empty) {
            continue;
        }

        let field = |idx: usize, name: &str| -> IoResult<f64> {
            let raw = record
                .get(idx)
                .ok_or_else(|| IoError::parse(source, line, format!("缺少{name}列 (索引 {idx})")))?;
            let value: f64 = raw
                .parse()
                .map_err(|_| IoError::parse(source, line, format!("{name}无法解析: '{raw}'")))?;
            if !value.is_finite() {
                return Err(IoError::parse(source, line, format!("{name}不是有限数: '{raw}'")));
            }
            Ok(value)
        };

        samples.push(ElevationSample::new(
            field(lat_idx, "纬度")?,
            field(lon_idx, "经度")?,
            field(elev_idx, "高程")?,
        ));
    }

    if samples.is_empty() {
        return Err(IoError::EmptyInput {
            file: source.to_string(),
        });
    }
    Ok(samples)
}

fn resolve_column(col_ref: &ColumnRef, headers: &csv::StringRecord, source: &str) -> IoResult<usize> {
    match col_ref {
        ColumnRef::Index(idx) => Ok(*idx),
        ColumnRef::Name(name) => headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| IoError::MissingColumn {
                column: name.clone(),
                file: source.to_string(),
                available: headers.iter().map(str::to_string).collect(),
            }),
    }
}
