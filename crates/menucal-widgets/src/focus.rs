#![forbid(unsafe_code)]

//! Focus tokens.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Opaque marker identifying which editable field holds input focus.
///
/// Tokens are unique for the process lifetime; the host reports focus
/// changes as "focus is now on token X / nowhere", and each field compares
/// against its own token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusToken(u64);

impl FocusToken {
    /// Allocate a fresh token.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}
