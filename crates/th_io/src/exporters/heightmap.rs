// crates/th_io/src/exporters/heightmap.rs
//! 灰度高度图导出
//!
//! 将栅格线性映射到 0..=255：`255 * (v - min) / (max - min)`，向零截断。
//! 第 `r` 行第 `c` 列对应图像像素 `(x = c, y = r)`。
//! 平坦栅格（max == min）全部映射为 0，未赋值单元同样为 0。

use std::path::Path;

use image::GrayImage;
use th_terrain::HeightGrid;
use tracing::info;

use crate::error::{IoError, IoResult};

/// 将栅格归一化为 8 位灰度，行优先
pub fn normalize_to_u8(grid: &HeightGrid) -> Vec<u8> {
    let (min, max) = match (grid.min_value(), grid.max_value()) {
        (Some(min), Some(max)) => (min, max),
        _ => return vec![0; grid.len()],
    };
    let range = max - min;
    if range <= 0.0 {
        return vec![0; grid.len()];
    }

    grid.data()
        .iter()
        .map(|&v| {
            if v.is_nan() {
                0
            } else {
                (255.0 * (v - min) / range).clamp(0.0, 255.0) as u8
            }
        })
        .collect()
}

/// 生成灰度图像
pub fn to_gray_image(grid: &HeightGrid) -> IoResult<GrayImage> {
    if grid.is_empty() {
        return Err(IoError::ImageEncode {
            path: "<memory>".to_string(),
            message: "栅格为空".to_string(),
        });
    }
    let width = u32::try_from(grid.cols()).map_err(|_| image_size_error(grid))?;
    let height = u32::try_from(grid.rows()).map_err(|_| image_size_error(grid))?;
    GrayImage::from_raw(width, height, normalize_to_u8(grid)).ok_or_else(|| image_size_error(grid))
}

/// 保存为 PNG 灰度图
pub fn save_heightmap_png(grid: &HeightGrid, path: impl AsRef<Path>) -> IoResult<()> {
    let path = path.as_ref();
    let img = to_gray_image(grid)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| IoError::ImageEncode {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    info!(
        "高度图已保存: {} ({} × {} 像素)",
        path.display(),
        grid.cols(),
        grid.rows()
    );
    Ok(())
}

fn image_size_error(grid: &HeightGrid) -> IoError {
    IoError::ImageEncode {
        path: "<memory>".to_string(),
        message: format!("图像尺寸无效: {} × {}", grid.cols(), grid.rows()),
    }
}
