/*!
 * Signal Traits
 * Registry and interrupt-routing abstractions
 */

use super::types::{Break, Signal, SignalBehavior, SignalDisposition, SignalResult};

/// Signal behavior registration
pub trait SignalRegistration: Send + Sync {
    /// Install `behavior` for `signal` and return the previously active
    /// behavior. The OS-level disposition is updated before this returns;
    /// on error the registry is left unchanged.
    fn register(&self, signal: Signal, behavior: SignalBehavior) -> SignalResult<SignalBehavior>;

    /// `register` without the previous-behavior result
    fn set_and_discard(&self, signal: Signal, behavior: SignalBehavior) -> SignalResult<()>;

    /// Currently recorded disposition for `signal`
    fn disposition(&self, signal: Signal) -> SignalDisposition;
}

/// Interrupt-to-break routing
pub trait InterruptRouting: Send + Sync {
    /// Route the interactive-interrupt signal to a catchable `Break` (true)
    /// or revert to the recorded behavior / OS default (false). Idempotent,
    /// not reference-counted.
    fn catch_interrupt(&self, enabled: bool) -> SignalResult<()>;

    /// Safe-point check: consumes a pending interrupt and raises `Break`
    fn check_interrupt(&self) -> Result<(), Break>;
}
