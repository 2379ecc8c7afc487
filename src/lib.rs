//! # mandelprof
//!
//! A one-shot batch tool: renders the Mandelbrot set over a fixed grid as
//! a grayscale intensity buffer, serializes it to a plain-text raster (PGM)
//! and a compressed raster (PNG), and runs a deliberately exponential
//! Fibonacci recursion as CPU ballast, all under a sampling-profiler
//! capture that brackets the run.
//!
//! This crate provides:
//! - Per-point escape-time iteration over the complex plane.
//! - An intensity grid renderer.
//! - Text and compressed raster serialization from the same buffer.
//! - A split-recursive Fibonacci workload for profiling.

#![warn(missing_docs)]

/// Configuration structures and defaults.
pub mod config;
/// Intensity grid buffer and the renderer that fills it.
pub mod grid;
/// Escape-time iteration kernel.
pub mod kernel;
/// Sampling-profiler capture span.
pub mod profiling;
/// Raster serialization (text and compressed).
pub mod writer;
/// CPU-bound Fibonacci workload.
pub mod workload;

pub use config::Config;
pub use grid::{render, IntensityGrid};
pub use kernel::escape_time;
pub use workload::fibonacci;
