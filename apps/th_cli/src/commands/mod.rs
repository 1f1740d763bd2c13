// apps/th_cli/src/commands/mod.rs

//! 子命令实现

pub mod config;
pub mod downsample;
pub mod heightmap;
pub mod listmodel;
pub mod surface;
