// src/config.rs

//! Defines the configuration structures for the renderer and its
//! surrounding harness.
//!
//! Grid dimensions, the iteration cap, output paths and workload sizing
//! all live here as plain structs with defaults rather than compile-time
//! constants, so tests can drive the pipeline at small grid sizes without
//! paying for the full 800x800 render.
//!
//! The `Serialize` trait is derived alongside `Deserialize` for
//! convenience, allowing the current configuration to be exported if
//! needed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration for a pipeline run.
///
/// Groups settings into logical categories: rendering, raster output,
/// the CPU workload, and the sampling profiler.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Escape-time rendering settings.
    pub render: RenderConfig,
    /// Raster output destinations.
    pub output: OutputConfig,
    /// CPU workload settings.
    pub workload: WorkloadConfig,
    /// Sampling profiler settings.
    pub profiling: ProfilingConfig,
}

// --- Render Configuration ---

/// Defines the sampled grid and the escape-time iteration budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Grid width in samples.
    pub width: u32,
    /// Grid height in samples.
    pub height: u32,
    /// Maximum escape-time iterations. A sample that exhausts the budget
    /// is treated as inside the set.
    pub max_iter: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 800,
            height: 800,
            max_iter: 1000,
        }
    }
}

// --- Output Configuration ---

/// Destinations for the serialized rasters.
///
/// Both files are overwritten on every run; paths are relative to the
/// working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the plain-text (PGM) raster.
    pub pgm_path: PathBuf,
    /// Path of the compressed (PNG) raster.
    pub png_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            pgm_path: PathBuf::from("mandelbrot.pgm"),
            png_path: PathBuf::from("mandelbrot.png"),
        }
    }
}

// --- Workload Configuration ---

/// Sizing for the Fibonacci profiling workload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Argument passed to the recursion on every round.
    pub fib_n: u64,
    /// Number of rounds executed before rendering starts.
    pub rounds: u32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        WorkloadConfig { fib_n: 70, rounds: 10 }
    }
}

// --- Profiling Configuration ---

/// Settings for the sampling-profiler capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilingConfig {
    /// Destination for the binary sampling trace, overwritten each run.
    pub trace_path: PathBuf,
    /// Sampling frequency in Hz.
    pub frequency: i32,
}

impl Default for ProfilingConfig {
    fn default() -> Self {
        ProfilingConfig {
            trace_path: PathBuf::from("combined.prof"),
            frequency: 1000,
        }
    }
}
