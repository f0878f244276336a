// ============================================================================
// Calculator Configuration
// Scale defaults, scale cap and call tracing
// ============================================================================

use crate::numeric::{MAX_DECIMALS, REFERENCE_DECIMALS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for creating a calculator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Scale used by text adapters when an operation has no `decimals` argument
    pub default_decimals: u32,

    /// Largest `decimals` argument the calculator accepts (at most 76)
    pub max_decimals: u32,

    /// Whether the call observer is notified after each call
    pub trace_calls: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_decimals: REFERENCE_DECIMALS,
            max_decimals: MAX_DECIMALS,
            trace_calls: true,
        }
    }
}

impl CalculatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the default scale
    pub fn with_default_decimals(mut self, decimals: u32) -> Self {
        self.default_decimals = decimals;
        self
    }

    /// Builder method: Cap the accepted scale
    pub fn with_max_decimals(mut self, decimals: u32) -> Self {
        self.max_decimals = decimals;
        self
    }

    /// Builder method: Enable or disable observer notifications
    pub fn with_call_tracing(mut self, enabled: bool) -> Self {
        self.trace_calls = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_decimals > MAX_DECIMALS {
            return Err(format!(
                "Max decimals cannot exceed {} (got {})",
                MAX_DECIMALS, self.max_decimals
            ));
        }

        if self.default_decimals > self.max_decimals {
            return Err(format!(
                "Default decimals {} exceeds max decimals {}",
                self.default_decimals, self.max_decimals
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Reference configuration
    /// - 18 decimals by default
    /// - Every supported scale accepted
    pub fn reference() -> Self {
        Self::default()
    }

    /// Fixed-scale configuration
    /// - `decimals` is both the default and the cap
    /// - No observer notifications
    pub fn compact(decimals: u32) -> Self {
        Self::new()
            .with_default_decimals(decimals)
            .with_max_decimals(decimals)
            .with_call_tracing(false)
    }
}
