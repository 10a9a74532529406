//! Global Allocator Interceptor for Peak-Memory Tracking
//!
//! Wraps the system allocator with atomic counters of live heap bytes and
//! the high-water mark. The trial runner brackets each sorter invocation
//! with [`reset_peak_allocation`] / [`peak_allocation`], so "peak" means the
//! maximum simultaneous usage observed during the trial, not the usage at
//! completion.
//!
//! The binary under measurement must install the interceptor:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOCATOR: TrackingAllocator = TrackingAllocator::new();
//! ```
//!
//! Without it the counters never move and every trial reports a peak of 0.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicU64, Ordering};

static LIVE_BYTES: AtomicU64 = AtomicU64::new(0);
static PEAK_BYTES: AtomicU64 = AtomicU64::new(0);
static BASELINE_BYTES: AtomicU64 = AtomicU64::new(0);

#[inline]
fn record_alloc(bytes: u64) {
    let live = LIVE_BYTES.fetch_add(bytes, Ordering::Relaxed) + bytes;
    PEAK_BYTES.fetch_max(live, Ordering::Relaxed);
}

#[inline]
fn record_dealloc(bytes: u64) {
    LIVE_BYTES.fetch_sub(bytes, Ordering::Relaxed);
}

/// System-allocator wrapper that maintains the live/peak byte counters.
pub struct TrackingAllocator;

impl TrackingAllocator {
    /// Create the allocator. `const` so it can initialize the
    /// `#[global_allocator]` static.
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TrackingAllocator {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size() as u64);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size() as u64);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        record_dealloc(layout.size() as u64);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            let old = layout.size() as u64;
            let new = new_size as u64;
            if new >= old {
                record_alloc(new - old);
            } else {
                record_dealloc(old - new);
            }
        }
        new_ptr
    }
}

/// Rebase the peak counter to the current live usage.
///
/// Call immediately before the code being measured; pairs with
/// [`peak_allocation`]. Pairing is unconditional in the trial runner — the
/// failure path reads the counter exactly like the success path, so no
/// tracking state leaks into the next trial.
pub fn reset_peak_allocation() {
    let live = LIVE_BYTES.load(Ordering::Relaxed);
    BASELINE_BYTES.store(live, Ordering::Relaxed);
    PEAK_BYTES.store(live, Ordering::Relaxed);
}

/// Peak heap growth in bytes since the last [`reset_peak_allocation`].
pub fn peak_allocation() -> u64 {
    PEAK_BYTES
        .load(Ordering::Relaxed)
        .saturating_sub(BASELINE_BYTES.load(Ordering::Relaxed))
}

/// Live heap bytes currently attributed to the interceptor.
pub fn current_allocation() -> u64 {
    LIVE_BYTES.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The test binary does not install the interceptor globally, so the
    // counters move only when we drive the GlobalAlloc impl by hand. The
    // lock keeps the two tests below from interleaving resets.
    static COUNTERS: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn peak_tracks_a_manual_allocation() {
        let _guard = COUNTERS.lock().unwrap();
        let tracker = TrackingAllocator::new();
        let layout = Layout::from_size_align(4096, 8).unwrap();

        reset_peak_allocation();
        unsafe {
            let ptr = tracker.alloc(layout);
            assert!(!ptr.is_null());
            assert!(peak_allocation() >= 4096);
            tracker.dealloc(ptr, layout);
        }

        // Peak is a high-water mark: freeing must not lower it.
        assert!(peak_allocation() >= 4096);

        reset_peak_allocation();
        assert_eq!(peak_allocation(), 0);
    }

    #[test]
    fn realloc_growth_counts_toward_peak() {
        let _guard = COUNTERS.lock().unwrap();
        let tracker = TrackingAllocator::new();
        let layout = Layout::from_size_align(1024, 8).unwrap();

        reset_peak_allocation();
        unsafe {
            let ptr = tracker.alloc(layout);
            assert!(!ptr.is_null());
            let grown = tracker.realloc(ptr, layout, 8192);
            assert!(!grown.is_null());
            assert!(peak_allocation() >= 8192);
            tracker.dealloc(grown, Layout::from_size_align(8192, 8).unwrap());
        }
    }
}
