// src/kernel.rs

//! Escape-time iteration for the quadratic Mandelbrot map.

use num_complex::Complex64;

/// Iterates `z = z^2 + c` from `z = 0` and returns the 0-based step index
/// at which `|z|` first exceeds 2.0, or `max_iter` if the orbit stays
/// bounded for the whole budget (the sample is treated as in-set).
///
/// The test compares squared moduli (`|z|^2 > 4.0`, strict), equivalent to
/// `|z| > 2.0` without a square root per step. Pure and total over finite
/// inputs.
pub fn escape_time(c: Complex64, max_iter: u32) -> u32 {
    let mut z = Complex64::new(0.0, 0.0);
    for i in 0..max_iter {
        z = z * z + c;
        if z.norm_sqr() > 4.0 {
            return i;
        }
    }
    max_iter
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn it_should_escape_immediately_outside_radius_two() {
        // |c| > 2 means the very first step already leaves the disc.
        assert_eq!(escape_time(Complex64::new(2.5, 0.0), 1000), 0);
        assert_eq!(escape_time(Complex64::new(-2.0, -2.0), 1000), 0);
        assert_eq!(escape_time(Complex64::new(0.0, 3.0), 1000), 0);
    }

    #[test]
    fn it_should_never_escape_at_the_origin() {
        assert_eq!(escape_time(Complex64::new(0.0, 0.0), 1000), 1000);
    }

    #[test]
    fn it_should_exhaust_the_budget_on_bounded_orbits() {
        // c = -1 cycles 0 -> -1 -> 0, bounded for any cap.
        for cap in [1, 10, 1000] {
            assert_eq!(escape_time(Complex64::new(-1.0, 0.0), cap), cap);
        }
    }

    #[test]
    fn it_should_keep_points_on_the_escape_radius() {
        // c = -2 orbits 0 -> -2 -> 2 -> 2 -> ...; |z| reaches exactly 2.0
        // and the strict comparison must not count that as an escape.
        assert_eq!(escape_time(Complex64::new(-2.0, 0.0), 50), 50);
    }

    #[test]
    fn it_should_be_deterministic() {
        let c = Complex64::new(-0.7436, 0.1318);
        let first = escape_time(c, 1000);
        for _ in 0..4 {
            assert_eq!(escape_time(c, 1000), first);
        }
    }

    #[test]
    fn it_should_count_steps_before_escape() {
        // c = -2/3 - 2i/3 leaves the disc on the sixth step (index 5).
        assert_eq!(escape_time(Complex64::new(-2.0 / 3.0, -2.0 / 3.0), 10), 5);
    }
}
