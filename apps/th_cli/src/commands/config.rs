// apps/th_cli/src/commands/config.rs

//! 配置文件命令
//!
//! 写出默认配置供编辑，或检查已有配置文件。

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::PathBuf;
use th_config::SurfaceConfig;
use tracing::{error, info};

/// 配置命令参数
#[derive(Args)]
pub struct ConfigArgs {
    /// 写出默认配置到此路径
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 检查已有配置文件
    #[arg(long)]
    pub check: Option<PathBuf>,
}

/// 执行配置命令
pub fn execute(args: ConfigArgs) -> Result<()> {
    if args.output.is_none() && args.check.is_none() {
        println!("用法: th_cli config --output <配置文件>");
        println!("      th_cli config --check <配置文件>");
        return Ok(());
    }

    if let Some(path) = &args.output {
        SurfaceConfig::default()
            .save_to_file(path)
            .with_context(|| format!("写出配置失败: {}", path.display()))?;
        info!("默认配置已写出: {}", path.display());
    }

    if let Some(path) = &args.check {
        match SurfaceConfig::from_file(path) {
            Ok(config) => {
                info!("配置有效: {}", path.display());
                println!("{config:#?}");
            }
            Err(e) => {
                error!("配置无效: {}", e);
                bail!("配置检查失败: {}", path.display());
            }
        }
    }

    Ok(())
}
