// ============================================================================
// Domain Module
// Calculator configuration
// ============================================================================

pub mod config;

pub use config::CalculatorConfig;
