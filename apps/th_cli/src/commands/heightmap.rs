// apps/th_cli/src/commands/heightmap.rs

//! 高度图导出命令

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use th_io::import::load_grid_csv;
use th_io::save_heightmap_png;
use tracing::info;

/// 高度图导出参数
#[derive(Args)]
pub struct HeightmapArgs {
    /// 输入栅格 CSV
    #[arg(short, long)]
    pub input: PathBuf,

    /// 输出 PNG
    #[arg(short, long, default_value = "heightmap.png")]
    pub output: PathBuf,
}

/// 执行高度图导出命令
pub fn execute(args: HeightmapArgs) -> Result<()> {
    let grid = load_grid_csv(&args.input)
        .with_context(|| format!("读取栅格失败: {}", args.input.display()))?;

    if let (Some(min), Some(max)) = (grid.min_value(), grid.max_value()) {
        info!("高程范围: [{:.3}, {:.3}] m", min, max);
    }

    save_heightmap_png(&grid, &args.output)
        .with_context(|| format!("写出高度图失败: {}", args.output.display()))?;
    Ok(())
}
