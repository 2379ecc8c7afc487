// src/writer/png.rs

//! Compressed grayscale raster output (PNG).

use crate::grid::IntensityGrid;
use anyhow::{Context, Result};
use log::info;
use png::{BitDepth, ColorType, Encoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize the grid as an 8-bit grayscale, non-interlaced PNG,
/// overwriting `path`.
///
/// The header (dimensions, bit depth, color type, interlace method) goes
/// out before any row data. Rows are streamed y-ascending, one write per
/// row borrowing that row's slice; no scratch buffer is carried between
/// rows. Compression and filtering stay at the codec defaults. Encoder
/// state is dropped on every exit path, so a failed setup never reaches
/// row writing or finalization.
pub fn write_png(path: &Path, grid: &IntensityGrid) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create compressed raster {}", path.display()))?;

    let mut encoder = Encoder::new(BufWriter::new(file), grid.width(), grid.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .context("failed to write compressed raster header")?;
    let mut rows = writer
        .stream_writer()
        .context("failed to start compressed raster row stream")?;
    for y in 0..grid.height() {
        rows.write_all(grid.row(y))
            .with_context(|| format!("failed to write compressed raster row {y}"))?;
    }
    rows.finish()
        .context("failed to finalize compressed raster")?;

    info!("compressed raster written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use crate::grid::render;
    use test_log::test;

    #[test]
    fn it_should_decode_back_to_the_source_intensities() {
        let config = RenderConfig {
            width: 16,
            height: 16,
            max_iter: 64,
        };
        let grid = render(&config);
        let path = std::env::temp_dir().join("mandelprof_png_roundtrip.png");
        write_png(&path, &grid).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0u8; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf).unwrap();

        assert_eq!(frame.width, 16);
        assert_eq!(frame.height, 16);
        assert_eq!(frame.color_type, ColorType::Grayscale);
        assert_eq!(frame.bit_depth, BitDepth::Eight);

        let expected: Vec<u8> = (0..16).flat_map(|y| grid.row(y).to_vec()).collect();
        assert_eq!(&buf[..frame.buffer_size()], &expected[..]);
    }
}
