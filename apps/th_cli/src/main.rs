// apps/th_cli/src/main.rs

//! TrackHeight 命令行界面
//!
//! 把赛道测量 CSV 转换为高度栅格，并导出下游格式。
//!
//! # 子命令
//!
//! - `surface`: 采样点 → 高度栅格 CSV
//! - `downsample`: 栅格块平均降采样
//! - `heightmap`: 栅格 → 灰度 PNG
//! - `listmodel`: 栅格 → QML ListModel
//! - `config`: 输出/检查配置文件

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// TrackHeight 赛道高度栅格工具
#[derive(Parser)]
#[command(name = "th_cli")]
#[command(author = "TrackHeight Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Turn lat/lon/elevation surveys into dense track height grids", long_about = None)]
struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 由采样点生成高度栅格
    Surface(commands::surface::SurfaceArgs),
    /// 块平均降采样
    Downsample(commands::downsample::DownsampleArgs),
    /// 导出灰度高度图
    Heightmap(commands::heightmap::HeightmapArgs),
    /// 导出 QML ListModel
    Listmodel(commands::listmodel::ListModelArgs),
    /// 配置文件工具
    Config(commands::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Surface(args) => commands::surface::execute(args),
        Commands::Downsample(args) => commands::downsample::execute(args),
        Commands::Heightmap(args) => commands::heightmap::execute(args),
        Commands::Listmodel(args) => commands::listmodel::execute(args),
        Commands::Config(args) => commands::config::execute(args),
    }
}
