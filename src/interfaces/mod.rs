// ============================================================================
// Interfaces Module
// Operation registry and the call observer contract
// ============================================================================

mod call_observer;
mod operation;

pub use call_observer::{CallObserver, CallRecord, LoggingCallObserver, NoOpCallObserver};
pub use operation::{CallOutput, Category, InputKind, InputSpec, Operation};
