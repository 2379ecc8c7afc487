// src/profiling.rs

//! Capture span for the sampling profiler.
//!
//! Wraps the pprof guard so the entry point can bracket the whole run:
//! start before the first workload round, stop after the last writer, and
//! only then serialize the trace.

use crate::config::ProfilingConfig;
use anyhow::{Context, Result};
use log::info;
use pprof::protos::Message;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// An active profiling capture.
///
/// Samples accumulate until [`stop`] is called; dropping the span without
/// calling [`stop`] discards them without writing a trace.
///
/// [`stop`]: CaptureSpan::stop
pub struct CaptureSpan {
    guard: pprof::ProfilerGuard<'static>,
    trace_path: PathBuf,
}

impl CaptureSpan {
    /// Start sampling.
    pub fn start(config: &ProfilingConfig) -> Result<Self> {
        let guard = pprof::ProfilerGuardBuilder::default()
            .frequency(config.frequency)
            .blocklist(&["libc", "libsystem", "libdyld"])
            .build()
            .context("failed to start the sampling profiler")?;
        info!("profiler capture started at {} Hz", config.frequency);
        Ok(Self {
            guard,
            trace_path: config.trace_path.clone(),
        })
    }

    /// Stop sampling and write the binary trace to the configured path.
    pub fn stop(self) -> Result<()> {
        let report = self
            .guard
            .report()
            .build()
            .context("failed to build the profiler report")?;
        let profile = report.pprof().context("failed to encode the profile")?;
        let mut body = Vec::new();
        profile
            .write_to_vec(&mut body)
            .context("failed to serialize the profile")?;

        let mut file = File::create(&self.trace_path).with_context(|| {
            format!("failed to create trace file {}", self.trace_path.display())
        })?;
        file.write_all(&body).with_context(|| {
            format!("failed to write trace file {}", self.trace_path.display())
        })?;
        info!("profiler trace written to {}", self.trace_path.display());
        Ok(())
    }
}
