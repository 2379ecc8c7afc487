// src/writer/pgm.rs

//! Plain-text grayscale raster output (PGM, magic `P2`).

use crate::grid::IntensityGrid;
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize the grid as an ASCII PGM file, overwriting `path`.
///
/// Framing: three header lines (`P2`, `<width> <height>`, `255`), then one
/// line per row, y-ascending, each intensity followed by a single space.
/// The trailing space before each newline is load-bearing: output must be
/// byte-identical across runs.
pub fn write_pgm(path: &Path, grid: &IntensityGrid) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create text raster {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "P2")?;
    writeln!(out, "{} {}", grid.width(), grid.height())?;
    writeln!(out, "255")?;
    for y in 0..grid.height() {
        for value in grid.row(y) {
            write!(out, "{} ", value)?;
        }
        writeln!(out)?;
    }
    out.flush()
        .with_context(|| format!("failed to write text raster {}", path.display()))?;

    info!("text raster written to {}", path.display());
    Ok(())
}
