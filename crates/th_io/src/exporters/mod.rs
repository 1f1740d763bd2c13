// crates/th_io/src/exporters/mod.rs

//! 数据导出模块
//!
//! - [`grid_csv`]: 栅格 CSV
//! - [`heightmap`]: 灰度 PNG 高度图
//! - [`listmodel`]: QML ListModel 文本

pub mod grid_csv;
pub mod heightmap;
pub mod listmodel;

pub use grid_csv::GridCsvExporter;
pub use heightmap::{normalize_to_u8, save_heightmap_png, to_gray_image};
pub use listmodel::{save_listmodel, write_listmodel};
