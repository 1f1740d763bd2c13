// apps/th_cli/src/commands/downsample.rs

//! 降采样命令
//!
//! 输出不做舍入，后续 `listmodel` 读取到的是完整精度的块平均值。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use th_config::SurfaceConfig;
use th_io::import::load_grid_csv;
use th_io::GridCsvExporter;
use th_terrain::downsample_mean;
use tracing::info;

/// 降采样参数
#[derive(Args)]
pub struct DownsampleArgs {
    /// 输入栅格 CSV
    #[arg(short, long)]
    pub input: PathBuf,

    /// 输出栅格 CSV
    #[arg(short, long, default_value = "grid_downsampled.csv")]
    pub output: PathBuf,

    /// 块边长（缺省取配置文件或默认值 4）
    #[arg(short, long)]
    pub factor: Option<usize>,

    /// 配置文件路径 (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// 执行降采样命令
pub fn execute(args: DownsampleArgs) -> Result<()> {
    let factor = match (args.factor, &args.config) {
        (Some(f), _) => f,
        (None, Some(path)) => {
            SurfaceConfig::from_file(path)
                .with_context(|| format!("加载配置失败: {}", path.display()))?
                .downsample_factor
        }
        (None, None) => SurfaceConfig::default().downsample_factor,
    };

    let grid = load_grid_csv(&args.input)
        .with_context(|| format!("读取栅格失败: {}", args.input.display()))?;
    let small = downsample_mean(&grid, factor).context("降采样失败")?;

    info!(
        "降采样: {} × {} → {} × {} (块边长 {})",
        grid.rows(),
        grid.cols(),
        small.rows(),
        small.cols(),
        factor
    );

    GridCsvExporter::new()
        .full_precision()
        .export(&args.output, &small)
        .with_context(|| format!("写出栅格失败: {}", args.output.display()))?;
    Ok(())
}
