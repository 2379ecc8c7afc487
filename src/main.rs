// src/main.rs

//! Entry point: a profiled batch run of the workload and the renderer.

use anyhow::Result;
use log::info;
use mandelprof::config::Config;
use mandelprof::profiling::CaptureSpan;
use mandelprof::writer::{pgm, png};
use mandelprof::{fibonacci, render};

fn main() -> Result<()> {
    // Default filter is "info" if RUST_LOG is not set. Logs go to stderr;
    // stdout carries only the workload result lines.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();

    // The capture span brackets everything below so samples from the
    // workload and the render both land in the trace.
    let span = CaptureSpan::start(&config.profiling)?;

    for _ in 0..config.workload.rounds {
        let value = fibonacci(config.workload.fib_n);
        println!("Fibonacci({}) = {}", config.workload.fib_n, value);
    }

    info!(
        "rendering {}x{} escape-time grid",
        config.render.width, config.render.height
    );
    let grid = render(&config.render);

    pgm::write_pgm(&config.output.pgm_path, &grid)?;
    png::write_png(&config.output.png_path, &grid)?;

    span.stop()?;
    Ok(())
}
