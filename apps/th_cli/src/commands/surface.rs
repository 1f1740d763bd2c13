// apps/th_cli/src/commands/surface.rs

//! 曲面生成命令
//!
//! 读取测量 CSV，运行投影、栅格化、扩展、填充、放大五个阶段，写出栅格 CSV。
//! 命令行参数覆盖配置文件中的同名项。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use th_config::SurfaceConfig;
use th_io::import::{load_samples, SampleCsvConfig};
use th_io::GridCsvExporter;
use th_terrain::SurfaceBuilder;
use tracing::info;

/// 曲面生成参数
#[derive(Args)]
pub struct SurfaceArgs {
    /// 测量 CSV 路径
    #[arg(short, long)]
    pub input: PathBuf,

    /// 输出栅格 CSV 路径
    #[arg(short, long, default_value = "grid.csv")]
    pub output: PathBuf,

    /// 配置文件路径 (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 赛道宽度 [单元]
    #[arg(long)]
    pub track_width: Option<usize>,

    /// 地面容差 [m]
    #[arg(long)]
    pub ground_tolerance: Option<f64>,

    /// 行方向边距 [单元]
    #[arg(long)]
    pub margin_rows: Option<usize>,

    /// 列方向边距 [单元]
    #[arg(long)]
    pub margin_cols: Option<usize>,

    /// 高差放大系数
    #[arg(long)]
    pub amplification: Option<f64>,
}

/// 合并配置文件与命令行参数
pub fn resolve_config(args: &SurfaceArgs) -> Result<SurfaceConfig> {
    let mut config = match &args.config {
        Some(path) => SurfaceConfig::from_file(path)
            .with_context(|| format!("加载配置失败: {}", path.display()))?,
        None => SurfaceConfig::default(),
    };

    if let Some(width) = args.track_width {
        config = config.with_track_width(width);
    }
    if let Some(tol) = args.ground_tolerance {
        config = config.with_ground_tolerance(tol);
    }
    if let Some(rows) = args.margin_rows {
        config.margin_rows = rows;
    }
    if let Some(cols) = args.margin_cols {
        config.margin_cols = cols;
    }
    if let Some(factor) = args.amplification {
        config = config.with_amplification(factor);
    }

    config.validate().context("配置无效")?;
    Ok(config)
}

/// 执行曲面生成命令
pub fn execute(args: SurfaceArgs) -> Result<()> {
    info!("=== TrackHeight 曲面生成 ===");
    let start = Instant::now();

    let config = resolve_config(&args)?;
    info!(
        "配置: 宽度={}, 容差={} m, 边距={}×{}, 放大={}",
        config.track_width,
        config.ground_tolerance,
        config.margin_rows,
        config.margin_cols,
        config.height_amplification_factor
    );

    let samples = load_samples(&args.input, &SampleCsvConfig::from(&config.input))
        .with_context(|| format!("读取采样点失败: {}", args.input.display()))?;

    let surface = SurfaceBuilder::new(config)
        .build(&samples)
        .context("构建高度曲面失败")?;

    info!(
        "原点: ({:.6}, {:.6}), 地面={:.3} m, 锚点={:.3} m",
        surface.origin.lat, surface.origin.lon, surface.ground_level, surface.anchor
    );

    GridCsvExporter::new()
        .export(&args.output, &surface.grid)
        .with_context(|| format!("写出栅格失败: {}", args.output.display()))?;

    info!("完成, 耗时 {:.2?}", start.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SurfaceArgs {
        SurfaceArgs {
            input: PathBuf::from("in.csv"),
            output: PathBuf::from("out.csv"),
            config: None,
            track_width: None,
            ground_tolerance: None,
            margin_rows: None,
            margin_cols: None,
            amplification: None,
        }
    }

    #[test]
    fn test_defaults_without_overrides() {
        assert_eq!(resolve_config(&args()).unwrap(), SurfaceConfig::default());
    }

    #[test]
    fn test_flags_override() {
        let mut a = args();
        a.track_width = Some(10);
        a.margin_cols = Some(0);
        a.amplification = Some(1.0);
        let config = resolve_config(&a).unwrap();
        assert_eq!(config.track_width, 10);
        assert_eq!(config.margin_cols, 0);
        assert_eq!(config.margin_rows, 150);
        assert_eq!(config.height_amplification_factor, 1.0);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let mut a = args();
        a.ground_tolerance = Some(-1.0);
        assert!(resolve_config(&a).is_err());
    }
}
