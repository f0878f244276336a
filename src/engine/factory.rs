// ============================================================================
// Calculator Factory
// Creates calculators with validated configuration
// ============================================================================

use crate::domain::config::CalculatorConfig;
use crate::engine::Calculator;
use crate::interfaces::{CallObserver, LoggingCallObserver, NoOpCallObserver};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `observer` - Observer notified after each call
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use float_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let calc = create_from_config(CalculatorConfig::reference(), Arc::new(NoOpCallObserver)).unwrap();
/// assert_eq!(calc.config().default_decimals, 18);
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    observer: Arc<dyn CallObserver>,
) -> Result<Calculator, String> {
    config.validate()?;

    tracing::debug!(
        "Creating calculator: default_decimals={}, max_decimals={}, trace_calls={}",
        config.default_decimals,
        config.max_decimals,
        config.trace_calls
    );

    Ok(Calculator::new(config, observer))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use float_calculator::prelude::*;
///
/// let calc = CalculatorBuilder::new()
///     .default_decimals(6)
///     .max_decimals(18)
///     .logging()
///     .build()
///     .unwrap();
///
/// let sum = calc.call_text(Operation::Add, &["1.5", "2.25", "6"]).unwrap();
/// assert_eq!(sum.to_string(), "3750000");
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    observer: Arc<dyn CallObserver>,
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorBuilder {
    /// Create a builder with the reference configuration and no observer
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::reference(),
            observer: Arc::new(NoOpCallObserver),
        }
    }

    // ========================================================================
    // Scale Configuration
    // ========================================================================

    pub fn default_decimals(mut self, decimals: u32) -> Self {
        self.config.default_decimals = decimals;
        self
    }

    pub fn max_decimals(mut self, decimals: u32) -> Self {
        self.config.max_decimals = decimals;
        self
    }

    // ========================================================================
    // Observer Configuration
    // ========================================================================

    /// Notify `observer` after each call
    pub fn observer(mut self, observer: Arc<dyn CallObserver>) -> Self {
        self.observer = observer;
        self.config.trace_calls = true;
        self
    }

    /// Log each call through `tracing`
    pub fn logging(self) -> Self {
        self.observer(Arc::new(LoggingCallObserver))
    }

    /// Skip observer notifications
    pub fn without_tracing(mut self) -> Self {
        self.config.trace_calls = false;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    pub fn reference() -> Self {
        Self::new()
    }

    pub fn compact(decimals: u32) -> Self {
        Self {
            config: CalculatorConfig::compact(decimals),
            observer: Arc::new(NoOpCallObserver),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    pub fn build(self) -> Result<Calculator, String> {
        create_from_config(self.config, self.observer)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &CalculatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::Operation;

    #[test]
    fn test_create_reference_calculator() {
        let calc = create_from_config(CalculatorConfig::reference(), Arc::new(NoOpCallObserver))
            .unwrap();
        assert_eq!(calc.config(), &CalculatorConfig::reference());
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = CalculatorConfig::new().with_max_decimals(100);
        assert!(create_from_config(config, Arc::new(NoOpCallObserver)).is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let calc = CalculatorBuilder::new()
            .default_decimals(9)
            .max_decimals(27)
            .without_tracing()
            .build()
            .unwrap();

        assert_eq!(calc.config().default_decimals, 9);
        assert_eq!(calc.config().max_decimals, 27);
        assert!(!calc.config().trace_calls);
    }

    #[test]
    fn test_builder_observer_enables_tracing() {
        let builder = CalculatorBuilder::compact(6).logging();
        assert!(builder.get_config().trace_calls);

        let calc = builder.build().unwrap();
        let output = calc.call_text(Operation::Negate, &["2.5", "6"]).unwrap();
        assert_eq!(output.to_string(), "-2500000");
    }

    #[test]
    fn test_builder_rejects_inconsistent_scales() {
        let result = CalculatorBuilder::new().max_decimals(4).build();
        assert!(result.is_err());
    }
}
