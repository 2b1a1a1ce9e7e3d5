/*!
 * sysport
 * Portable facade over operating-system primitives: process identity,
 * filesystem queries and mutations, environment access, shell execution,
 * platform metadata, and POSIX signal registration with an
 * interrupt-to-break bridge.
 */

pub mod os;
pub mod signals;

// Re-exports
pub use os::{CpuTime, OsError, OsResult, PlatformInfo};
pub use signals::{
    raise, Break, DeliveryOutcome, DispositionBackend, HandlerFn, InterruptRouting, NullBackend,
    OsBackend, RegistryStats, Signal, SignalBehavior, SignalDisposition, SignalError,
    SignalRegistration, SignalRegistry, SignalResult,
};
