//! Cooperative cancellation hooks
//!
//! Long aggregations poll an [`Interrupt`] every few hundred rows. The host
//! decides what "interrupted" means: a flag flipped from another thread, a
//! signal check in an embedding runtime, or nothing at all.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Something the row loops can ask "should I stop?"
pub trait Interrupt {
    fn is_interrupted(&self) -> bool;
}

/// Never requests cancellation
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverInterrupt;

impl Interrupt for NeverInterrupt {
    #[inline]
    fn is_interrupted(&self) -> bool {
        false
    }
}

/// Shared cancellation flag.
///
/// Clones share the same flag, so one handle can be given to the
/// computation and another kept by whoever may cancel it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Clear a previous cancellation request
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl Interrupt for CancelToken {
    fn is_interrupted(&self) -> bool {
        self.is_cancelled()
    }
}

impl<F: Fn() -> bool> Interrupt for F {
    fn is_interrupted(&self) -> bool {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_never() {
        assert!(!NeverInterrupt.is_interrupted());
    }

    #[test]
    fn test_token_shared_between_clones() {
        let token = CancelToken::new();
        let handle = token.clone();
        assert!(!token.is_interrupted());

        handle.cancel();
        assert!(token.is_interrupted());

        token.reset();
        assert!(!handle.is_cancelled());
    }

    #[test]
    fn test_closure() {
        let calls = Cell::new(0);
        let hook = || {
            calls.set(calls.get() + 1);
            calls.get() > 2
        };
        assert!(!hook.is_interrupted());
        assert!(!hook.is_interrupted());
        assert!(hook.is_interrupted());
    }

    #[test]
    fn test_dyn_dispatch() {
        let token = CancelToken::new();
        token.cancel();
        let hooks: [&dyn Interrupt; 2] = [&NeverInterrupt, &token];
        assert_eq!(
            hooks.iter().map(|h| h.is_interrupted()).collect::<Vec<_>>(),
            vec![false, true]
        );
    }
}
