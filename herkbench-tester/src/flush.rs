//! Cache flush before timed calls.

use std::hint::black_box;

const CACHE_LINE: usize = 64;

/// Touch `mib` MiB of fresh memory so the next call starts with a cold cache.
///
/// `mib == 0` does nothing. If the buffer cannot be allocated the flush is
/// skipped with a warning.
pub fn flush_cache(mib: usize) {
    let bytes = mib.saturating_mul(1024 * 1024);
    if bytes == 0 {
        return;
    }
    let mut buf = Vec::new();
    if buf.try_reserve_exact(bytes).is_err() {
        log::warn!("cache flush of {} MiB skipped: allocation failed", mib);
        return;
    }
    buf.resize(bytes, 0u8);
    for (i, line) in buf.chunks_mut(CACHE_LINE).enumerate() {
        line[0] = i as u8;
    }
    let mut sum = 0u8;
    for line in buf.chunks(CACHE_LINE) {
        sum = sum.wrapping_add(line[0]);
    }
    black_box(sum);
    log::trace!("flushed {} MiB", mib);
}
