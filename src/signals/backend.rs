/*!
 * Disposition Backends
 * OS-level installation of signal dispositions
 */

use super::interrupt;
use super::types::{Signal, SignalDisposition, SignalError, SignalResult};
use log::{debug, trace};
use nix::libc::c_int;
use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet};
use std::sync::atomic::{AtomicU64, Ordering};

/// Seam between the registry table and the OS disposition table.
/// Tests inject fakes here; production uses [`OsBackend`].
pub trait DispositionBackend: Send + Sync {
    /// Install `disposition` for `signal`. Returns once the OS-level change
    /// is visible; errors mean the host refused the change.
    fn install(&self, signal: Signal, disposition: SignalDisposition) -> SignalResult<()>;

    /// Point the interactive-interrupt signal at the break bridge
    fn route_interrupt(&self) -> SignalResult<()>;
}

/// Deliveries recorded by the handler trampoline, one bit per signal number.
/// Drained by `SignalRegistry::poll` at safe points.
static PENDING: AtomicU64 = AtomicU64::new(0);

/// Raw OS handler for `Handle` dispositions. Async-signal-safe: a single
/// atomic bit set, nothing else; callbacks run later at a safe point.
extern "C" fn handler_trampoline(signo: c_int) {
    if (0..64).contains(&signo) {
        PENDING.fetch_or(1u64 << signo, Ordering::SeqCst);
    }
}

pub(super) fn take_pending() -> u64 {
    PENDING.swap(0, Ordering::SeqCst)
}

/// Installs dispositions through `sigaction`
pub struct OsBackend;

impl OsBackend {
    pub fn new() -> Self {
        Self
    }

    fn swap(&self, signal: Signal, handler: SigHandler) -> SignalResult<()> {
        let action = SigAction::new(handler, SaFlags::SA_RESTART, SigSet::empty());
        // Safety: installed handlers only touch static atomics.
        unsafe { sigaction(signal.to_nix(), &action) }
            .map(|_previous| ())
            .map_err(|errno| {
                debug!("sigaction refused for {}: {}", signal, errno);
                SignalError::InvalidSignal(signal.number())
            })
    }
}

impl DispositionBackend for OsBackend {
    fn install(&self, signal: Signal, disposition: SignalDisposition) -> SignalResult<()> {
        let handler = match disposition {
            SignalDisposition::Default => SigHandler::SigDfl,
            SignalDisposition::Ignore => SigHandler::SigIgn,
            SignalDisposition::Handle => SigHandler::Handler(handler_trampoline),
        };

        trace!("Installing {:?} disposition for {}", disposition, signal);
        self.swap(signal, handler)
    }

    fn route_interrupt(&self) -> SignalResult<()> {
        trace!("Routing {} to the break bridge", Signal::SIGINT);
        self.swap(
            Signal::SIGINT,
            SigHandler::Handler(interrupt::interrupt_trampoline),
        )
    }
}

impl Default for OsBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Backend that never touches the OS. Registry semantics only; delivery
/// happens through `SignalRegistry::deliver`.
pub struct NullBackend;

impl DispositionBackend for NullBackend {
    fn install(&self, _signal: Signal, _disposition: SignalDisposition) -> SignalResult<()> {
        Ok(())
    }

    fn route_interrupt(&self) -> SignalResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: PENDING is process-global, parallel tests would race it.
    #[test]
    fn test_pending_mask_records_and_drains() {
        let signo = Signal::SIGUSR2.number();
        handler_trampoline(signo);

        let mask = take_pending();
        assert_ne!(mask & (1u64 << signo), 0);

        // Drained
        assert_eq!(take_pending(), 0);

        // Out-of-range deliveries are dropped
        handler_trampoline(-3);
        handler_trampoline(64);
        assert_eq!(take_pending(), 0);
    }
}
