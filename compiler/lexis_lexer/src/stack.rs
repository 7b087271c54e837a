//! Stack growth for delegated sub-runs.
//!
//! A delegate re-lexes its match with a nested run, and tables may delegate
//! to themselves. Each nesting level is bounded by
//! [`LexConfig::max_delegate_depth`](crate::LexConfig), and the recursion
//! grows the native stack on demand so a deep limit can't overflow it.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
