// crates/th_terrain/tests/surface_pipeline.rs

//! 曲面流水线集成测试
//!
//! 验证各阶段串联后的端到端行为。

use th_config::SurfaceConfig;
use th_geo::{ElevationSample, LocalProjector};
use th_terrain::surface::{fill_gaps, footprint_extent, ground_level, rasterize, widen, GridLayout};
use th_terrain::SurfaceBuilder;

/// 一段位于印第安纳州的环形赛道采样（合成）
fn oval_samples() -> Vec<ElevationSample> {
    let center_lat = 39.7950;
    let center_lon = -86.2347;
    (0..72)
        .map(|i| {
            let t = f64::from(i) * std::f64::consts::TAU / 72.0;
            ElevationSample::new(
                center_lat + 0.0040 * t.sin(),
                center_lon + 0.0065 * t.cos(),
                220.0 + 3.0 * (2.0 * t).sin(),
            )
        })
        .collect()
}

#[test]
fn test_equator_pair_end_to_end() {
    let samples = vec![
        ElevationSample::new(0.0, 0.0, 100.0),
        ElevationSample::new(0.0, 0.001, 110.0),
    ];
    let config = SurfaceConfig::default()
        .with_track_width(2)
        .with_amplification(2.0);
    let surface = SurfaceBuilder::new(config).build(&samples).unwrap();

    assert!((surface.projected[1].x - 111.19).abs() < 0.01);
    assert!(surface.projected.iter().all(|p| p.y.abs() < 1e-9));
    assert_eq!(surface.ground_level, 98.0);
    assert_eq!(surface.anchor, 98.0);

    // 两个足迹 (3×3) 都已放大
    let (r0, c0) = surface.layout.cell_of(&surface.projected[0]);
    let (r1, c1) = surface.layout.cell_of(&surface.projected[1]);
    for dr in 0..3 {
        for dc in 0..3 {
            assert_eq!(surface.grid.get(r0 + dr - 1, c0 + dc - 1), Some(102.0));
            assert_eq!(surface.grid.get(r1 + dr - 1, c1 + dc - 1), Some(122.0));
        }
    }

    // 其余单元为地面
    let track_cells = surface.grid.data().iter().filter(|&&v| v != 98.0).count();
    assert_eq!(track_cells, 18);
}

#[test]
fn test_grid_extent_plus_margins() {
    let samples = oval_samples();
    let projector = LocalProjector::from_samples(&samples).unwrap();
    let projected = projector.project_all(&samples);
    let max_x = projected.iter().map(|p| p.x as usize).max().unwrap();
    let max_y = projected.iter().map(|p| p.y as usize).max().unwrap();

    for (mr, mc) in [(0, 0), (150, 150), (10, 40)] {
        let config = SurfaceConfig::default().with_margins(mr, mc);
        let surface = SurfaceBuilder::new(config).build(&samples).unwrap();
        assert_eq!(surface.grid.rows(), max_y + 1 + mr);
        assert_eq!(surface.grid.cols(), max_x + 1 + mc);
    }
}

#[test]
fn test_widened_footprints_cover_box() {
    let samples = oval_samples();
    let projector = LocalProjector::from_samples(&samples).unwrap();
    let projected = projector.project_all(&samples);
    let layout = GridLayout::for_samples(&projected, 40, 40);
    let mut grid = layout.allocate();
    rasterize(&projected, &layout, &mut grid);

    let track_width = 11;
    let (before, after) = footprint_extent(track_width);
    let widened = widen(&grid, track_width);

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if !grid.is_set(row, col) {
                continue;
            }
            for r in row.saturating_sub(before)..=(row + after).min(grid.rows() - 1) {
                for c in col.saturating_sub(before)..=(col + after).min(grid.cols() - 1) {
                    assert!(widened.is_set(r, c), "({r}, {c}) unset near ({row}, {col})");
                }
            }
        }
    }

    // 每个已赋值单元的值都来自某个采样点
    let elevations: Vec<f64> = samples.iter().map(|s| s.elevation).collect();
    assert!(widened
        .data()
        .iter()
        .filter(|v| !v.is_nan())
        .all(|v| elevations.contains(v)));
}

#[test]
fn test_fill_uses_sample_minimum() {
    let samples = oval_samples();
    let projector = LocalProjector::from_samples(&samples).unwrap();
    let projected = projector.project_all(&samples);
    let layout = GridLayout::for_samples(&projected, 20, 20);
    let mut grid = layout.allocate();
    rasterize(&projected, &layout, &mut grid);
    let mut widened = widen(&grid, 6);

    let floor = ground_level(samples.iter().map(|s| s.elevation), 2.0).unwrap();
    let min_elevation = samples.iter().map(|s| s.elevation).fold(f64::INFINITY, f64::min);
    assert_eq!(floor, min_elevation - 2.0);

    let unset_before = widened.count_unset();
    let filled = fill_gaps(&mut widened, floor);
    assert_eq!(filled, unset_before);
    assert_eq!(widened.count_unset(), 0);
}

#[test]
fn test_default_config_on_oval() {
    let samples = oval_samples();
    let surface = SurfaceBuilder::new(SurfaceConfig::default()).build(&samples).unwrap();

    let min_elevation = samples.iter().map(|s| s.elevation).fold(f64::INFINITY, f64::min);
    let max_elevation = samples.iter().map(|s| s.elevation).fold(f64::NEG_INFINITY, f64::max);
    let floor = min_elevation - 2.0;

    assert_eq!(surface.grid.count_unset(), 0);
    assert_eq!(surface.grid.min_value(), Some(floor));

    let upper_bound = (max_elevation - floor) * 35.0 + floor;
    assert!(surface.grid.max_value().unwrap() <= upper_bound + 1e-9);

    // 每个赛道单元还原后都是某个采样高程
    for &v in surface.grid.data().iter().filter(|&&v| v != floor) {
        let restored = (v - floor) / 35.0 + floor;
        assert!(
            samples.iter().any(|s| (s.elevation - restored).abs() < 1e-9),
            "value {v} does not map back to a sample"
        );
    }
}

#[test]
fn test_single_sample_degenerate_grid() {
    let samples = vec![ElevationSample::new(10.0, 20.0, 50.0)];
    let config = SurfaceConfig::default().with_margins(4, 4).with_track_width(2);
    let surface = SurfaceBuilder::new(config).build(&samples).unwrap();

    assert_eq!(surface.grid.shape(), (5, 5));
    // 单元 (2,2) 及其 3×3 邻域为 (50-48)*35+48 = 118
    assert_eq!(surface.grid.get(2, 2), Some(118.0));
    assert_eq!(surface.grid.get(1, 1), Some(118.0));
    assert_eq!(surface.grid.get(0, 0), Some(48.0));
}
