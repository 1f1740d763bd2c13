// crates/th_io/src/exporters/listmodel.rs
//! QML ListModel 导出
//!
//! 每个单元生成一条 `ListElement { row: R; column: C; value: V }`，
//! 行优先排列，包裹在 `ListModel { ... }` 中，供 QML 前端直接加载。

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use th_terrain::HeightGrid;
use tracing::info;

use crate::error::IoResult;

/// 将栅格写为 ListModel 文本（末尾不含换行）
pub fn write_listmodel<W: Write>(w: &mut W, grid: &HeightGrid) -> IoResult<()> {
    writeln!(w, "ListModel {{")?;
    for (r, row) in grid.iter_rows().enumerate() {
        for (c, v) in row.iter().enumerate() {
            writeln!(w, "    ListElement {{ row: {r}; column: {c}; value: {v:?} }}")?;
        }
    }
    write!(w, "}}")?;
    Ok(())
}

/// 保存 ListModel 文件
pub fn save_listmodel(grid: &HeightGrid, path: impl AsRef<Path>) -> IoResult<()> {
    let path = path.as_ref();
    let mut w = BufWriter::new(File::create(path)?);
    write_listmodel(&mut w, grid)?;
    w.flush()?;
    info!("ListModel 已保存: {} ({} 个元素)", path.display(), grid.len());
    Ok(())
}
