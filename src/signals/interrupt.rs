/*!
 * Interrupt Bridge
 * Converts interactive-interrupt delivery into a pending Break condition
 */

use nix::libc::c_int;
use std::sync::atomic::{AtomicBool, Ordering};

/// Latched interrupt delivery, raised as `Break` at the next safe point.
/// Process-wide: signal delivery is process-wide state by nature.
static INTERRUPT_PENDING: AtomicBool = AtomicBool::new(false);

/// Raw OS handler for the routed interrupt. Async-signal-safe: a single
/// atomic store and nothing else.
pub(super) extern "C" fn interrupt_trampoline(_signo: c_int) {
    INTERRUPT_PENDING.store(true, Ordering::SeqCst);
}

/// Record a delivery, as the trampoline would
pub(super) fn set_pending() {
    INTERRUPT_PENDING.store(true, Ordering::SeqCst);
}

/// Consume the pending interrupt, if any
pub(super) fn take_pending() -> bool {
    INTERRUPT_PENDING.swap(false, Ordering::SeqCst)
}

/// Peek without consuming
pub(super) fn is_pending() -> bool {
    INTERRUPT_PENDING.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_latch() {
        assert!(!take_pending());

        set_pending();
        assert!(is_pending());

        // First take consumes, second sees nothing
        assert!(take_pending());
        assert!(!is_pending());
        assert!(!take_pending());
    }
}
