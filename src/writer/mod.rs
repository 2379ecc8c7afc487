// src/writer/mod.rs

//! Raster serialization.
//!
//! Both writers consume the same intensity grid independently and neither
//! mutates it. The text format is assertable byte-for-byte; the compressed
//! format is validated by decoding it back.

/// Plain-text grayscale raster (PGM, magic `P2`).
pub mod pgm;
/// Compressed grayscale raster (PNG).
pub mod png;
