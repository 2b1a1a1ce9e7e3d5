/*!
 * Signal Registry
 * Process-wide behavior table with swap-and-return-previous semantics
 */

use super::backend::{self, DispositionBackend, OsBackend};
use super::interrupt;
use super::traits::{InterruptRouting, SignalRegistration};
use super::types::{
    Break, DeliveryOutcome, RegistryStats, Signal, SignalBehavior, SignalDisposition, SignalError,
    SignalResult,
};
use ahash::RandomState;
use dashmap::DashMap;
use log::{debug, info, warn};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Send `signal` to the current process
pub fn raise(signal: Signal) -> SignalResult<()> {
    nix::sys::signal::raise(signal.to_nix())
        .map_err(|_| SignalError::InvalidSignal(signal.number()))
}

/// Process-wide signal registry
///
/// Cloneable handle over shared state: at most one behavior is active per
/// signal, and installing a new one atomically replaces and returns the
/// prior behavior. Entries start as `Default` and live for the process
/// lifetime. Concurrent registrations for the same signal resolve
/// last-writer-wins with the atomicity of the underlying disposition call.
#[derive(Clone)]
pub struct SignalRegistry {
    table: Arc<DashMap<Signal, SignalBehavior, RandomState>>,
    backend: Arc<dyn DispositionBackend>,
    interrupt_routed: Arc<AtomicBool>,
    stats: Arc<RwLock<RegistryStats>>,
}

impl SignalRegistry {
    /// Registry bound to the host OS disposition table
    pub fn new() -> Self {
        Self::with_backend(Arc::new(OsBackend::new()))
    }

    /// Registry with an injected backend; tests install fakes here
    pub fn with_backend(backend: Arc<dyn DispositionBackend>) -> Self {
        info!("Signal registry initialized");
        Self {
            table: Arc::new(DashMap::with_hasher(RandomState::new())),
            backend,
            interrupt_routed: Arc::new(AtomicBool::new(false)),
            stats: Arc::new(RwLock::new(RegistryStats::default())),
        }
    }

    /// Deliver `signal` through its registered behavior, synchronously on
    /// the calling thread. This is the dispatch half of the safe-point
    /// design: `poll` calls it for OS-recorded deliveries, and tests call it
    /// to simulate delivery without involving the OS.
    pub fn deliver(&self, signal: Signal) -> DeliveryOutcome {
        let outcome = if signal == Signal::SIGINT && self.interrupt_routed.load(Ordering::SeqCst) {
            interrupt::set_pending();
            DeliveryOutcome::Interrupted
        } else {
            // Clone out of the shard so a callback can re-register without
            // deadlocking against its own map entry.
            let behavior = self.table.get(&signal).map(|entry| entry.value().clone());

            match behavior {
                Some(SignalBehavior::Ignore) => DeliveryOutcome::Ignored,
                Some(SignalBehavior::Handle(callback)) => {
                    callback(signal);
                    DeliveryOutcome::Handled
                }
                Some(SignalBehavior::Default) | None => DeliveryOutcome::DefaultAction,
            }
        };

        let mut stats = self.stats.write();
        stats.total_delivered += 1;
        match outcome {
            DeliveryOutcome::Handled => stats.total_handled += 1,
            DeliveryOutcome::Ignored => stats.total_ignored += 1,
            DeliveryOutcome::DefaultAction | DeliveryOutcome::Interrupted => {}
        }
        drop(stats);

        debug!("Delivered {} with outcome {:?}", signal, outcome);
        outcome
    }

    /// Dispatch every OS-recorded pending delivery. Call from a safe point;
    /// callbacks run here, on the calling thread, never in signal context.
    /// Returns the number of signals dispatched.
    pub fn poll(&self) -> usize {
        let mask = backend::take_pending();
        if mask == 0 {
            return 0;
        }

        let mut dispatched = 0;
        for signo in 0..64 {
            if mask & (1u64 << signo) == 0 {
                continue;
            }
            match Signal::from_number(signo) {
                Ok(signal) => {
                    self.deliver(signal);
                    dispatched += 1;
                }
                Err(_) => warn!("Dropping pending delivery for unknown signal {}", signo),
            }
        }
        dispatched
    }

    /// Peek at an undelivered interrupt without consuming it
    pub fn interrupt_pending(&self) -> bool {
        interrupt::is_pending()
    }

    pub fn stats(&self) -> RegistryStats {
        self.stats.read().clone()
    }
}

impl Default for SignalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalRegistration for SignalRegistry {
    fn register(&self, signal: Signal, behavior: SignalBehavior) -> SignalResult<SignalBehavior> {
        if !signal.can_catch() {
            warn!("Disposition change refused for {}", signal);
            return Err(SignalError::InvalidSignal(signal.number()));
        }

        let disposition = behavior.disposition();
        // OS disposition is updated before this call returns; a refused
        // install leaves the table untouched.
        self.backend.install(signal, disposition)?;

        if signal == Signal::SIGINT && self.interrupt_routed.swap(false, Ordering::SeqCst) {
            debug!("Explicit {} registration replaces interrupt routing", signal);
        }

        let previous = self
            .table
            .insert(signal, behavior)
            .unwrap_or(SignalBehavior::Default);

        let mut stats = self.stats.write();
        stats.total_registrations += 1;
        match (previous.disposition(), disposition) {
            (SignalDisposition::Handle, SignalDisposition::Handle) => {}
            (SignalDisposition::Handle, _) => {
                stats.handlers_registered = stats.handlers_registered.saturating_sub(1);
            }
            (_, SignalDisposition::Handle) => stats.handlers_registered += 1,
            _ => {}
        }
        drop(stats);

        info!("Registered {:?} behavior for {}", disposition, signal);
        Ok(previous)
    }

    fn set_and_discard(&self, signal: Signal, behavior: SignalBehavior) -> SignalResult<()> {
        self.register(signal, behavior).map(|_previous| ())
    }

    fn disposition(&self, signal: Signal) -> SignalDisposition {
        self.table
            .get(&signal)
            .map(|entry| entry.value().disposition())
            .unwrap_or(SignalDisposition::Default)
    }
}

impl InterruptRouting for SignalRegistry {
    fn catch_interrupt(&self, enabled: bool) -> SignalResult<()> {
        if self.interrupt_routed.load(Ordering::SeqCst) == enabled {
            debug!(
                "Interrupt routing already {}",
                if enabled { "enabled" } else { "disabled" }
            );
            return Ok(());
        }

        if enabled {
            self.backend.route_interrupt()?;
        } else {
            // Revert to whatever the table records; OS default when nothing
            // was explicitly registered.
            self.backend
                .install(Signal::SIGINT, self.disposition(Signal::SIGINT))?;
        }

        self.interrupt_routed.store(enabled, Ordering::SeqCst);
        info!(
            "Interrupt routing {}",
            if enabled { "enabled" } else { "disabled" }
        );
        Ok(())
    }

    fn check_interrupt(&self) -> Result<(), Break> {
        if interrupt::take_pending() {
            self.stats.write().interrupts_raised += 1;
            debug!("Raising break at safe point");
            return Err(Break);
        }
        Ok(())
    }
}
