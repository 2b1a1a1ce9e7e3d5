/*!
 * Signal Types
 * Signal identifiers, behaviors, and result types
 */

use nix::sys::signal::Signal as NixSignal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Signal operation result
pub type SignalResult<T> = Result<T, SignalError>;

/// Signal errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalError {
    #[error("Invalid signal: {0}")]
    InvalidSignal(i32),
}

/// Catchable control-flow condition raised in place of default termination
/// when interrupt routing is enabled.
///
/// Not a defect: it propagates through ordinary `Result` paths until caught.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("interrupted")]
pub struct Break;

/// POSIX signals this facade manages
///
/// Numeric values are whatever the host OS defines; conversions go through
/// the platform's own constants rather than hard-coded numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// Hangup detected on controlling terminal
    SIGHUP,
    /// Interrupt from keyboard (Ctrl+C)
    SIGINT,
    /// Quit from keyboard (Ctrl+\)
    SIGQUIT,
    /// Illegal instruction
    SIGILL,
    /// Abort signal
    SIGABRT,
    /// Floating-point exception
    SIGFPE,
    /// Kill signal (disposition cannot be changed)
    SIGKILL,
    /// User-defined signal 1
    SIGUSR1,
    /// Invalid memory reference
    SIGSEGV,
    /// User-defined signal 2
    SIGUSR2,
    /// Broken pipe
    SIGPIPE,
    /// Timer signal
    SIGALRM,
    /// Termination signal
    SIGTERM,
    /// Child process stopped or terminated
    SIGCHLD,
    /// Continue if stopped
    SIGCONT,
    /// Stop process (disposition cannot be changed)
    SIGSTOP,
    /// Stop typed at terminal (Ctrl+Z)
    SIGTSTP,
    /// Terminal input for background process
    SIGTTIN,
    /// Terminal output for background process
    SIGTTOU,
    /// Virtual alarm clock
    SIGVTALRM,
    /// Profiling timer expired
    SIGPROF,
}

impl Signal {
    /// Every signal this facade manages
    pub const ALL: [Signal; 21] = [
        Signal::SIGHUP,
        Signal::SIGINT,
        Signal::SIGQUIT,
        Signal::SIGILL,
        Signal::SIGABRT,
        Signal::SIGFPE,
        Signal::SIGKILL,
        Signal::SIGUSR1,
        Signal::SIGSEGV,
        Signal::SIGUSR2,
        Signal::SIGPIPE,
        Signal::SIGALRM,
        Signal::SIGTERM,
        Signal::SIGCHLD,
        Signal::SIGCONT,
        Signal::SIGSTOP,
        Signal::SIGTSTP,
        Signal::SIGTTIN,
        Signal::SIGTTOU,
        Signal::SIGVTALRM,
        Signal::SIGPROF,
    ];

    /// Convert from a host-OS signal number
    pub fn from_number(n: i32) -> SignalResult<Self> {
        let nix = NixSignal::try_from(n).map_err(|_| SignalError::InvalidSignal(n))?;
        Self::from_nix(nix).ok_or(SignalError::InvalidSignal(n))
    }

    /// Host-OS signal number
    pub fn number(self) -> i32 {
        self.to_nix() as i32
    }

    /// Check if the disposition can be changed (false for SIGKILL/SIGSTOP)
    pub fn can_catch(self) -> bool {
        !matches!(self, Signal::SIGKILL | Signal::SIGSTOP)
    }

    /// Get human-readable description
    pub fn description(self) -> &'static str {
        match self {
            Signal::SIGHUP => "Hangup",
            Signal::SIGINT => "Interrupt",
            Signal::SIGQUIT => "Quit",
            Signal::SIGILL => "Illegal instruction",
            Signal::SIGABRT => "Aborted",
            Signal::SIGFPE => "Floating point exception",
            Signal::SIGKILL => "Killed",
            Signal::SIGUSR1 => "User defined signal 1",
            Signal::SIGSEGV => "Segmentation fault",
            Signal::SIGUSR2 => "User defined signal 2",
            Signal::SIGPIPE => "Broken pipe",
            Signal::SIGALRM => "Alarm clock",
            Signal::SIGTERM => "Terminated",
            Signal::SIGCHLD => "Child status changed",
            Signal::SIGCONT => "Continued",
            Signal::SIGSTOP => "Stopped (signal)",
            Signal::SIGTSTP => "Stopped",
            Signal::SIGTTIN => "Stopped (tty input)",
            Signal::SIGTTOU => "Stopped (tty output)",
            Signal::SIGVTALRM => "Virtual timer expired",
            Signal::SIGPROF => "Profiling timer expired",
        }
    }

    pub(crate) fn to_nix(self) -> NixSignal {
        match self {
            Signal::SIGHUP => NixSignal::SIGHUP,
            Signal::SIGINT => NixSignal::SIGINT,
            Signal::SIGQUIT => NixSignal::SIGQUIT,
            Signal::SIGILL => NixSignal::SIGILL,
            Signal::SIGABRT => NixSignal::SIGABRT,
            Signal::SIGFPE => NixSignal::SIGFPE,
            Signal::SIGKILL => NixSignal::SIGKILL,
            Signal::SIGUSR1 => NixSignal::SIGUSR1,
            Signal::SIGSEGV => NixSignal::SIGSEGV,
            Signal::SIGUSR2 => NixSignal::SIGUSR2,
            Signal::SIGPIPE => NixSignal::SIGPIPE,
            Signal::SIGALRM => NixSignal::SIGALRM,
            Signal::SIGTERM => NixSignal::SIGTERM,
            Signal::SIGCHLD => NixSignal::SIGCHLD,
            Signal::SIGCONT => NixSignal::SIGCONT,
            Signal::SIGSTOP => NixSignal::SIGSTOP,
            Signal::SIGTSTP => NixSignal::SIGTSTP,
            Signal::SIGTTIN => NixSignal::SIGTTIN,
            Signal::SIGTTOU => NixSignal::SIGTTOU,
            Signal::SIGVTALRM => NixSignal::SIGVTALRM,
            Signal::SIGPROF => NixSignal::SIGPROF,
        }
    }

    fn from_nix(sig: NixSignal) -> Option<Self> {
        match sig {
            NixSignal::SIGHUP => Some(Signal::SIGHUP),
            NixSignal::SIGINT => Some(Signal::SIGINT),
            NixSignal::SIGQUIT => Some(Signal::SIGQUIT),
            NixSignal::SIGILL => Some(Signal::SIGILL),
            NixSignal::SIGABRT => Some(Signal::SIGABRT),
            NixSignal::SIGFPE => Some(Signal::SIGFPE),
            NixSignal::SIGKILL => Some(Signal::SIGKILL),
            NixSignal::SIGUSR1 => Some(Signal::SIGUSR1),
            NixSignal::SIGSEGV => Some(Signal::SIGSEGV),
            NixSignal::SIGUSR2 => Some(Signal::SIGUSR2),
            NixSignal::SIGPIPE => Some(Signal::SIGPIPE),
            NixSignal::SIGALRM => Some(Signal::SIGALRM),
            NixSignal::SIGTERM => Some(Signal::SIGTERM),
            NixSignal::SIGCHLD => Some(Signal::SIGCHLD),
            NixSignal::SIGCONT => Some(Signal::SIGCONT),
            NixSignal::SIGSTOP => Some(Signal::SIGSTOP),
            NixSignal::SIGTSTP => Some(Signal::SIGTSTP),
            NixSignal::SIGTTIN => Some(Signal::SIGTTIN),
            NixSignal::SIGTTOU => Some(Signal::SIGTTOU),
            NixSignal::SIGVTALRM => Some(Signal::SIGVTALRM),
            NixSignal::SIGPROF => Some(Signal::SIGPROF),
            _ => None,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.number())
    }
}

/// Signal handler callback function type
///
/// Invoked at safe points on the delivering thread, which may be any thread
/// and may sit at an arbitrary suspension point of the interrupted logical
/// task. Keep callbacks short; lock-acquiring or allocation-heavy work is
/// discouraged. A callback that panics unwinds out of the safe point that
/// dispatched it; the registry does not catch unwinds.
pub type HandlerFn = Arc<dyn Fn(Signal) + Send + Sync>;

/// Active behavior for one signal
///
/// The callback is owned by the registry entry and replaced wholesale on
/// re-registration.
#[derive(Clone)]
pub enum SignalBehavior {
    /// No process-level override; the OS default action applies
    Default,
    /// Suppress the signal entirely
    Ignore,
    /// Invoke a callback on delivery
    Handle(HandlerFn),
}

impl SignalBehavior {
    /// Wrap a closure as a `Handle` behavior
    pub fn handle<F>(callback: F) -> Self
    where
        F: Fn(Signal) + Send + Sync + 'static,
    {
        SignalBehavior::Handle(Arc::new(callback))
    }

    /// The shape of this behavior, without its callback
    pub fn disposition(&self) -> SignalDisposition {
        match self {
            SignalBehavior::Default => SignalDisposition::Default,
            SignalBehavior::Ignore => SignalDisposition::Ignore,
            SignalBehavior::Handle(_) => SignalDisposition::Handle,
        }
    }
}

impl fmt::Debug for SignalBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalBehavior::Default => write!(f, "Default"),
            SignalBehavior::Ignore => write!(f, "Ignore"),
            SignalBehavior::Handle(_) => write!(f, "Handle(..)"),
        }
    }
}

/// Signal disposition - what happens when a signal is received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalDisposition {
    /// Default action for the signal
    Default,
    /// Ignore the signal
    Ignore,
    /// Call custom handler
    Handle,
}

/// Outcome of one delivery through the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Suppressed by an `Ignore` behavior
    Ignored,
    /// A registered callback ran
    Handled,
    /// No override; the OS default action applies
    DefaultAction,
    /// Routed to the break bridge; `check_interrupt` will raise `Break`
    Interrupted,
}

/// Registry statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total_registrations: u64,
    pub total_delivered: u64,
    pub total_handled: u64,
    pub total_ignored: u64,
    pub interrupts_raised: u64,
    pub handlers_registered: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_roundtrip() {
        for signal in Signal::ALL {
            assert_eq!(Signal::from_number(signal.number()).unwrap(), signal);
        }
    }

    #[test]
    fn test_from_number_rejects_unknown() {
        assert_eq!(Signal::from_number(0), Err(SignalError::InvalidSignal(0)));
        assert_eq!(Signal::from_number(-1), Err(SignalError::InvalidSignal(-1)));
        assert_eq!(Signal::from_number(999), Err(SignalError::InvalidSignal(999)));
    }

    #[test]
    fn test_catchability() {
        assert!(!Signal::SIGKILL.can_catch());
        assert!(!Signal::SIGSTOP.can_catch());
        assert!(Signal::SIGINT.can_catch());
        assert!(Signal::SIGTERM.can_catch());
    }

    #[test]
    fn test_behavior_disposition() {
        assert_eq!(SignalBehavior::Default.disposition(), SignalDisposition::Default);
        assert_eq!(SignalBehavior::Ignore.disposition(), SignalDisposition::Ignore);
        assert_eq!(
            SignalBehavior::handle(|_| {}).disposition(),
            SignalDisposition::Handle
        );
    }

    #[test]
    fn test_display_uses_host_numbers() {
        let text = Signal::SIGINT.to_string();
        assert!(text.starts_with("SIGINT("));
        assert!(text.contains(&Signal::SIGINT.number().to_string()));
    }
}
