//! Best-effort memory sampling around a measured call.
//!
//! Two sources are supported. [`TrackingAllocator`] counts live heap bytes and
//! their high-water mark, but only when a binary installs it as the global
//! allocator. A measurement then reports how far the peak rose above the live
//! total at the start, so tables freed before the call returns still show up.
//! Without it, Linux hosts fall back to the resident set size from
//! `/proc/self/status`, which moves in page-sized steps and includes memory
//! the allocator has not yet returned to the OS. Either way, the resulting
//! deltas are illustrative and may be negative.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering, compiler_fence};

static LIVE_BYTES: AtomicI64 = AtomicI64::new(0);
static PEAK_BYTES: AtomicI64 = AtomicI64::new(0);
static TRACKING: AtomicBool = AtomicBool::new(false);

fn record_growth(bytes: i64) {
    let live = LIVE_BYTES.fetch_add(bytes, Ordering::Relaxed) + bytes;
    PEAK_BYTES.fetch_max(live, Ordering::Relaxed);
    TRACKING.store(true, Ordering::Relaxed);
}

/// Global allocator wrapper that tracks live heap bytes and their peak.
///
/// ```ignore
/// #[global_allocator]
/// static GLOBAL: twinarray::memory::TrackingAllocator = twinarray::memory::TrackingAllocator;
/// ```
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record_growth(layout.size() as i64);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record_growth(layout.size() as i64);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        LIVE_BYTES.fetch_sub(layout.size() as i64, Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            record_growth(new_size as i64 - layout.size() as i64);
        }
        new_ptr
    }
}

/// Live heap bytes seen by [`TrackingAllocator`], if it is installed.
pub fn tracked_bytes() -> Option<i64> {
    if TRACKING.load(Ordering::Relaxed) {
        Some(LIVE_BYTES.load(Ordering::Relaxed))
    } else {
        None
    }
}

/// Highest live total since the last [`reset_peak`], if tracking is installed.
pub fn peak_bytes() -> Option<i64> {
    if TRACKING.load(Ordering::Relaxed) {
        Some(PEAK_BYTES.load(Ordering::Relaxed))
    } else {
        None
    }
}

/// Restart the high-water mark from the current live total.
pub fn reset_peak() {
    PEAK_BYTES.store(LIVE_BYTES.load(Ordering::Relaxed), Ordering::Relaxed);
}

/// Where memory samples come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryProbe {
    /// Peak over starting live heap bytes from [`TrackingAllocator`]
    Allocator,
    /// Resident set size from `/proc/self/status`
    ProcStatus,
    /// No sampling; every delta is zero
    Disabled,
}

impl MemoryProbe {
    /// Most precise source available in this process.
    pub fn detect() -> Self {
        if tracked_bytes().is_some() {
            MemoryProbe::Allocator
        } else if resident_bytes().is_some() {
            MemoryProbe::ProcStatus
        } else {
            MemoryProbe::Disabled
        }
    }

    /// Sample taken when a measurement starts.
    pub fn begin(&self) -> Option<i64> {
        match self {
            MemoryProbe::Allocator => {
                reset_peak();
                tracked_bytes()
            }
            MemoryProbe::ProcStatus => resident_bytes(),
            MemoryProbe::Disabled => None,
        }
    }

    /// Sample taken when a measurement ends.
    pub fn end(&self) -> Option<i64> {
        match self {
            MemoryProbe::Allocator => peak_bytes(),
            MemoryProbe::ProcStatus => resident_bytes(),
            MemoryProbe::Disabled => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MemoryProbe::Allocator => "allocator",
            MemoryProbe::ProcStatus => "proc-status",
            MemoryProbe::Disabled => "disabled",
        }
    }
}

/// Difference between two samples, zero when either is missing.
pub fn delta(before: Option<i64>, after: Option<i64>) -> i64 {
    match (before, after) {
        (Some(before), Some(after)) => after - before,
        _ => 0,
    }
}

/// Settle point taken before a measurement starts.
///
/// There is no collector to run; this keeps setup work from being reordered
/// into the timed window and gives other threads a chance to finish.
pub fn quiesce() {
    compiler_fence(Ordering::SeqCst);
    std::thread::yield_now();
    compiler_fence(Ordering::SeqCst);
}

/// Resident set size from `/proc/self/status` (Linux only).
#[cfg(target_os = "linux")]
pub fn resident_bytes() -> Option<i64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    parse_vm_rss(&status)
}

#[cfg(not(target_os = "linux"))]
pub fn resident_bytes() -> Option<i64> {
    None
}

fn parse_vm_rss(status: &str) -> Option<i64> {
    let line = status.lines().find(|line| line.starts_with("VmRSS:"))?;
    let kb: i64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb * 1024)
}
