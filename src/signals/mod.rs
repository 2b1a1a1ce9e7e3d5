/*!
 * Signals Module
 * Process-wide signal dispositions and the interrupt-to-break bridge
 */

mod backend;
mod interrupt;
mod registry;
pub mod traits;
pub mod types;

// Re-export public API
pub use backend::{DispositionBackend, NullBackend, OsBackend};
pub use registry::{raise, SignalRegistry};
pub use traits::*;
pub use types::{
    Break, DeliveryOutcome, HandlerFn, RegistryStats, Signal, SignalBehavior, SignalDisposition,
    SignalError, SignalResult,
};
