// ============================================================================
// Float Calculator Library
// Deterministic bounded-precision decimal arithmetic over 256-bit words
// ============================================================================

//! # Float Calculator
//!
//! Decimal numbers as signed 256-bit mantissas over a power-of-ten scale,
//! with bit-exact results that never touch host floating point.
//!
//! ## Features
//!
//! - **Checked arithmetic** with unbounded intermediates and word-sized results
//! - **Exact comparisons** and decimal-point transformations
//! - **Special functions**: `exp`, `ln`, a cubic root solver and full-precision
//!   multiply-divide
//! - **Normalized components** `(mantissa, exponent)` and canonical text
//! - **Operation registry** addressed by name, with pluggable call observers
//!
//! ## Example
//!
//! ```rust
//! use float_calculator::prelude::*;
//! use std::sync::Arc;
//!
//! let calc = Calculator::new(CalculatorConfig::reference(), Arc::new(NoOpCallObserver));
//!
//! // 10.0 / 4.0 at 18 decimals
//! let quotient = calc.call_text(Operation::Divide, &["10.0", "4.0", "18"]).unwrap();
//! assert_eq!(quotient.to_string(), "2500000000000000000");
//!
//! // Same operation on typed values
//! let a = ScaledInteger::parse("10.0", 18).unwrap();
//! let b = ScaledInteger::parse("4.0", 18).unwrap();
//! assert_eq!(a.checked_div(&b).unwrap().to_string(), "2.500000000000000000");
//!
//! // Normalized components
//! let parts = calc.call_text(Operation::GetComponents, &["1.5", "18"]).unwrap();
//! assert_eq!(parts.to_string(), "15, -1");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::CalculatorConfig;
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder};
    pub use crate::interfaces::{
        CallObserver, CallOutput, CallRecord, Category, InputKind, InputSpec,
        LoggingCallObserver, NoOpCallObserver, Operation,
    };
    pub use crate::numeric::{CalcError, CalcResult, ScaledInteger};
}
