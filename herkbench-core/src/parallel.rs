//! Scoped-thread row partitioning for kernels.
//!
//! Uses `std::thread::scope` with no pool to manage. The harness
//! never sees these threads; they live entirely inside one kernel call and
//! are therefore inside its timing window.

/// Below this many multiply-adds per call, threads cost more than they save.
pub const PARALLEL_MIN_WORK: usize = 64 * 1024;

/// Execute `f(chunk_start, chunk_end)` over `[start, end)`, splitting across
/// the available cores when `work` (an estimate of total multiply-adds) is
/// large enough to pay for the threads.
#[inline]
pub fn parallel_for_chunks<F>(start: usize, end: usize, work: usize, f: F)
where
    F: Fn(usize, usize) + Sync + Send + Copy,
{
    if start >= end {
        return;
    }
    let num_threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4);
    let total = end - start;
    let chunk_size = total.div_ceil(num_threads);

    if work < PARALLEL_MIN_WORK || total <= chunk_size || num_threads <= 1 {
        f(start, end);
        return;
    }

    std::thread::scope(|s| {
        for chunk_start in (start..end).step_by(chunk_size) {
            let chunk_end = (chunk_start + chunk_size).min(end);
            s.spawn(move || {
                f(chunk_start, chunk_end);
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_parallel_for_chunks_covers_range() {
        let counter = AtomicUsize::new(0);
        let counter_ref = &counter;
        parallel_for_chunks(0, 1000, usize::MAX, move |start, end| {
            counter_ref.fetch_add(end - start, Ordering::Relaxed);
        });
        assert_eq!(counter.load(Ordering::Relaxed), 1000);
    }

    #[test]
    fn test_small_work_runs_inline() {
        let calls = AtomicUsize::new(0);
        let calls_ref = &calls;
        parallel_for_chunks(0, 1000, 10, move |start, end| {
            assert_eq!((start, end), (0, 1000));
            calls_ref.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_empty_range() {
        let counter = AtomicUsize::new(0);
        let counter_ref = &counter;
        parallel_for_chunks(5, 5, usize::MAX, move |_, _| {
            counter_ref.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(counter.load(Ordering::Relaxed), 0);
    }
}
