// src/workload.rs

//! CPU-bound Fibonacci workload for the sampling profiler.
//!
//! The recursion is split across three functions so the profiler
//! attributes samples to distinct frames for the n-1 and n-2 branches
//! instead of one self-recursive frame. Cost is exponential in `n`; the
//! iterative form would defeat the workload's purpose.

/// n-th Fibonacci number via deliberately inefficient split recursion.
///
/// Exact for `n <= 93`; beyond that the sum overflows `u64`.
pub fn fibonacci(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    descend_prev(n - 1) + descend_prev2(n - 2)
}

/// First branch of the split: re-enters `fibonacci` for the n-1 subproblem.
fn descend_prev(n: u64) -> u64 {
    if n <= 1 {
        n
    } else {
        fibonacci(n)
    }
}

/// Second branch of the split: re-enters `fibonacci` for the n-2 subproblem.
fn descend_prev2(n: u64) -> u64 {
    if n <= 1 {
        n
    } else {
        fibonacci(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    /// Straightforward iterative reference.
    fn fibonacci_iterative(n: u64) -> u64 {
        let (mut a, mut b) = (0u64, 1u64);
        for _ in 0..n {
            let next = a + b;
            a = b;
            b = next;
        }
        a
    }

    #[test]
    fn it_should_return_the_argument_below_two() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
    }

    #[test]
    fn it_should_compute_the_tenth_fibonacci_number() {
        assert_eq!(fibonacci(10), 55);
    }

    #[test]
    fn it_should_agree_with_the_iterative_reference() {
        for n in 0..=20 {
            assert_eq!(fibonacci(n), fibonacci_iterative(n), "n = {n}");
        }
    }
}
