// ============================================================================
// Engine Module
// Operations over scaled mantissas and the calculator that dispatches them
// ============================================================================

pub mod arithmetic;
pub mod comparison;
pub mod cubic;
pub mod exponential;
pub mod full_math;
pub mod logarithm;
pub mod transform;

mod calculator;
mod working;

pub mod factory;

pub use calculator::Calculator;
pub use cubic::cubic_solve;
pub use exponential::exponential;
pub use factory::{create_from_config, CalculatorBuilder};
pub use full_math::{full_mul_div, full_mul_div_rounding_up};
pub use logarithm::natural_log;
