// ============================================================================
// Call Observer Interface
// Defines the contract for observing calculator calls
// ============================================================================

use super::operation::{CallOutput, Operation};
use crate::numeric::CalcError;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One completed call, successful or not
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CallRecord {
    pub operation: Operation,
    pub arguments: Vec<BigInt>,
    pub outcome: Result<CallOutput, CalcError>,
    pub timestamp: DateTime<Utc>,
}

impl CallRecord {
    pub fn new(
        operation: Operation,
        arguments: &[BigInt],
        outcome: Result<CallOutput, CalcError>,
    ) -> Self {
        Self {
            operation,
            arguments: arguments.to_vec(),
            outcome,
            timestamp: Utc::now(),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Observer notified after every call.
/// Implementations can handle logging, auditing, metrics, etc.
pub trait CallObserver: Send + Sync {
    fn on_call(&self, record: &CallRecord);
}

/// No-op observer
pub struct NoOpCallObserver;

impl CallObserver for NoOpCallObserver {
    fn on_call(&self, _record: &CallRecord) {}
}

/// Logging observer
pub struct LoggingCallObserver;

impl CallObserver for LoggingCallObserver {
    fn on_call(&self, record: &CallRecord) {
        match &record.outcome {
            Ok(output) => tracing::debug!(
                "Calculator call: {}({:?}) = {}",
                record.operation,
                record.arguments,
                output
            ),
            Err(err) => tracing::debug!(
                "Calculator call: {}({:?}) failed: {}",
                record.operation,
                record.arguments,
                err
            ),
        }
    }
}
