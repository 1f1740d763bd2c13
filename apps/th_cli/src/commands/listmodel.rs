// apps/th_cli/src/commands/listmodel.rs

//! ListModel 导出命令

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use th_io::import::load_grid_csv;
use th_io::save_listmodel;

/// ListModel 导出参数
#[derive(Args)]
pub struct ListModelArgs {
    /// 输入栅格 CSV
    #[arg(short, long)]
    pub input: PathBuf,

    /// 输出文件
    #[arg(short, long, default_value = "HeightModel.qml")]
    pub output: PathBuf,
}

/// 执行 ListModel 导出命令
pub fn execute(args: ListModelArgs) -> Result<()> {
    let grid = load_grid_csv(&args.input)
        .with_context(|| format!("读取栅格失败: {}", args.input.display()))?;
    save_listmodel(&grid, &args.output)
        .with_context(|| format!("写出 ListModel 失败: {}", args.output.display()))?;
    Ok(())
}
