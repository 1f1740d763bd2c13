// crates/th_io/src/import/mod.rs

//! 数据导入模块

pub mod grid_csv;
pub mod samples_csv;

pub use grid_csv::{load_grid_csv, read_grid_csv};
pub use samples_csv::{load_samples, read_samples, ColumnRef, SampleCsvConfig};
