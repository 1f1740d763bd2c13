// crates/th_io/src/lib.rs

//! TrackHeight IO 层
//!
//! 负责采样点与栅格的文件读写。
//!
//! # 模块
//!
//! - [`import`]: 测量 CSV 与栅格 CSV 导入
//! - [`exporters`]: 栅格 CSV、PNG 高度图、ListModel 导出
//! - [`error`]: IO 错误类型

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod exporters;
pub mod import;

pub use error::{IoError, IoResult};
pub use exporters::{save_heightmap_png, save_listmodel, GridCsvExporter};
pub use import::{load_grid_csv, load_samples, ColumnRef, SampleCsvConfig};

/// 预导入模块
pub mod prelude {
    pub use crate::error::{IoError, IoResult};
    pub use crate::exporters::{
        normalize_to_u8, save_heightmap_png, save_listmodel, write_listmodel, GridCsvExporter,
    };
    pub use crate::import::{
        load_grid_csv, load_samples, read_grid_csv, read_samples, ColumnRef, SampleCsvConfig,
    };
}
