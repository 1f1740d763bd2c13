// crates/th_config/src/surface_config.rs

//! SurfaceConfig - 赛道高度曲面配置
//!
//! 所有参数均有默认值，JSON 文件中缺省的字段使用默认值补齐。
//!
//! ```json
//! {
//!   "ground_tolerance": 2.0,
//!   "margin_rows": 150,
//!   "margin_cols": 150,
//!   "track_width": 60,
//!   "height_amplification_factor": 35.0,
//!   "downsample_factor": 4,
//!   "input": {
//!     "latitude_column": "Latitude",
//!     "longitude_column": "Longitude",
//!     "elevation_column": "Metres above sea level",
//!     "delimiter": ","
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// 曲面生成配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// 地面容差 [m]：无数据区域的高度 = 最低采样高程 - 该值
    #[serde(default = "default_ground_tolerance")]
    pub ground_tolerance: f64,

    /// 额外边距行数（上下各一半）
    #[serde(default = "default_margin")]
    pub margin_rows: usize,

    /// 额外边距列数（左右各一半）
    #[serde(default = "default_margin")]
    pub margin_cols: usize,

    /// 赛道宽度 [单元/米]
    #[serde(default = "default_track_width")]
    pub track_width: usize,

    /// 高差放大倍数
    #[serde(default = "default_amplification")]
    pub height_amplification_factor: f64,

    /// 降采样块边长
    #[serde(default = "default_downsample_factor")]
    pub downsample_factor: usize,

    /// 输入表格列配置
    #[serde(default)]
    pub input: InputColumns,
}

fn default_ground_tolerance() -> f64 { 2.0 }
fn default_margin() -> usize { 150 }
fn default_track_width() -> usize { 60 }
fn default_amplification() -> f64 { 35.0 }
fn default_downsample_factor() -> usize { 4 }

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            ground_tolerance: default_ground_tolerance(),
            margin_rows: default_margin(),
            margin_cols: default_margin(),
            track_width: default_track_width(),
            height_amplification_factor: default_amplification(),
            downsample_factor: default_downsample_factor(),
            input: InputColumns::default(),
        }
    }
}

/// 输入表格列配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputColumns {
    /// 纬度列名
    #[serde(default = "default_latitude_column")]
    pub latitude_column: String,
    /// 经度列名
    #[serde(default = "default_longitude_column")]
    pub longitude_column: String,
    /// 高程列名
    #[serde(default = "default_elevation_column")]
    pub elevation_column: String,
    /// 分隔符
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_latitude_column() -> String { "Latitude".to_string() }
fn default_longitude_column() -> String { "Longitude".to_string() }
fn default_elevation_column() -> String { "Metres above sea level".to_string() }
fn default_delimiter() -> char { ',' }

impl Default for InputColumns {
    fn default() -> Self {
        Self {
            latitude_column: default_latitude_column(),
            longitude_column: default_longitude_column(),
            elevation_column: default_elevation_column(),
            delimiter: default_delimiter(),
        }
    }
}

impl SurfaceConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置地面容差
    pub fn with_ground_tolerance(mut self, tolerance: f64) -> Self {
        self.ground_tolerance = tolerance;
        self
    }

    /// 设置边距
    pub fn with_margins(mut self, rows: usize, cols: usize) -> Self {
        self.margin_rows = rows;
        self.margin_cols = cols;
        self
    }

    /// 设置赛道宽度
    pub fn with_track_width(mut self, width: usize) -> Self {
        self.track_width = width;
        self
    }

    /// 设置放大倍数
    pub fn with_amplification(mut self, factor: f64) -> Self {
        self.height_amplification_factor = factor;
        self
    }

    /// 设置降采样块边长
    pub fn with_downsample_factor(mut self, factor: usize) -> Self {
        self.downsample_factor = factor;
        self
    }

    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// 从 JSON 字符串解析并验证
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: SurfaceConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ground_tolerance.is_finite() || self.ground_tolerance < 0.0 {
            return Err(ConfigError::invalid(
                "ground_tolerance",
                self.ground_tolerance,
                "地面容差必须为非负有限数",
            ));
        }

        if !self.height_amplification_factor.is_finite() || self.height_amplification_factor <= 0.0 {
            return Err(ConfigError::invalid(
                "height_amplification_factor",
                self.height_amplification_factor,
                "放大倍数必须为正的有限数",
            ));
        }

        if self.downsample_factor == 0 {
            return Err(ConfigError::invalid(
                "downsample_factor",
                self.downsample_factor,
                "降采样块边长必须 ≥ 1",
            ));
        }

        let columns = [
            ("input.latitude_column", &self.input.latitude_column),
            ("input.longitude_column", &self.input.longitude_column),
            ("input.elevation_column", &self.input.elevation_column),
        ];
        for (key, name) in columns {
            if name.trim().is_empty() {
                return Err(ConfigError::invalid(key, name, "列名不能为空"));
            }
        }

        if !self.input.delimiter.is_ascii() {
            return Err(ConfigError::invalid(
                "input.delimiter",
                self.input.delimiter,
                "分隔符必须为单个 ASCII 字符",
            ));
        }

        Ok(())
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
