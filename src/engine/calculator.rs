// ============================================================================
// Calculator
// Dispatches named operations over positional big-integer arguments
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::{arithmetic, comparison, cubic, exponential, full_math, logarithm, transform};
use crate::interfaces::{CallObserver, CallOutput, CallRecord, InputKind, Operation};
use crate::numeric::{components, constants, parse_decimal, CalcError, CalcResult};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::sync::Arc;

/// Stateless calculator over the operation registry.
///
/// Holds only immutable configuration and an observer, so a single instance
/// can be shared across threads.
pub struct Calculator {
    config: CalculatorConfig,
    observer: Arc<dyn CallObserver>,
}

impl Calculator {
    /// Create a new calculator
    pub fn new(config: CalculatorConfig, observer: Arc<dyn CallObserver>) -> Self {
        Self { config, observer }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Call an operation with positional arguments.
    ///
    /// Errors are returned verbatim; the observer sees every call, failed or
    /// not, when call tracing is enabled.
    pub fn call(&self, operation: Operation, args: &[BigInt]) -> CalcResult<CallOutput> {
        let outcome = self.dispatch(operation, args);

        if let Err(err) = &outcome {
            tracing::debug!("Call to {} rejected: {}", operation, err);
        }

        if self.config.trace_calls {
            self.observer
                .on_call(&CallRecord::new(operation, args, outcome.clone()));
        }

        outcome
    }

    /// Call an operation by its external name (e.g. `"isGreaterThan"`)
    pub fn call_by_name(&self, name: &str, args: &[BigInt]) -> CalcResult<CallOutput> {
        let operation = name.parse::<Operation>().inspect_err(|_| {
            tracing::debug!("Unknown operation: {}", name);
        })?;
        self.call(operation, args)
    }

    /// Call an operation with text arguments.
    ///
    /// Decimal inputs are scaled by the call's own `decimals` argument, or by
    /// the configured default when the operation has none. Integer inputs
    /// parse as signed integers. A blank input takes the operation's sample
    /// value.
    pub fn call_text(&self, operation: Operation, inputs: &[&str]) -> CalcResult<CallOutput> {
        let args = self.parse_inputs(operation, inputs).inspect_err(|err| {
            tracing::debug!("Arguments for {} rejected: {}", operation, err);
        })?;
        self.call(operation, &args)
    }

    // ========================================================================
    // Argument Handling
    // ========================================================================

    fn parse_inputs(&self, operation: Operation, inputs: &[&str]) -> CalcResult<Vec<BigInt>> {
        let specs = operation.inputs();
        if inputs.len() != specs.len() {
            return Err(CalcError::InvalidArgument);
        }

        let text_of = |index: usize| match inputs[index].trim() {
            "" => specs[index].placeholder,
            text => text,
        };

        let decimals = match operation.decimals_position() {
            Some(index) => self.scale_arg(&parse_integer(text_of(index))?)?,
            None => self.config.default_decimals,
        };

        specs
            .iter()
            .enumerate()
            .map(|(index, spec)| match spec.kind {
                InputKind::Decimal => parse_decimal(text_of(index), decimals),
                InputKind::Int256 | InputKind::Uint256 => parse_integer(text_of(index)),
            })
            .collect()
    }

    /// A `decimals` argument, bounded by the configured cap
    fn scale_arg(&self, value: &BigInt) -> CalcResult<u32> {
        value
            .to_u32()
            .filter(|decimals| *decimals <= self.config.max_decimals)
            .ok_or(CalcError::InvalidArgument)
    }

    fn dispatch(&self, operation: Operation, args: &[BigInt]) -> CalcResult<CallOutput> {
        if args.len() != operation.arity() {
            return Err(CalcError::InvalidArgument);
        }

        match operation {
            // Arithmetic
            Operation::Add => {
                arithmetic::add(&args[0], &args[1], self.scale_arg(&args[2])?).map(CallOutput::Integer)
            }
            Operation::Subtract => {
                arithmetic::subtract(&args[0], &args[1], self.scale_arg(&args[2])?)
                    .map(CallOutput::Integer)
            }
            Operation::Multiply => {
                arithmetic::multiply(&args[0], &args[1], self.scale_arg(&args[2])?)
                    .map(CallOutput::Integer)
            }
            Operation::Divide => {
                arithmetic::divide(&args[0], &args[1], self.scale_arg(&args[2])?)
                    .map(CallOutput::Integer)
            }
            Operation::Negate => {
                arithmetic::negate(&args[0], self.scale_arg(&args[1])?).map(CallOutput::Integer)
            }

            // Comparisons
            Operation::IsEqual => {
                comparison::is_equal(&args[0], &args[1], self.scale_arg(&args[2])?)
                    .map(CallOutput::Boolean)
            }
            Operation::IsGreaterThan => {
                comparison::is_greater_than(&args[0], &args[1], self.scale_arg(&args[2])?)
                    .map(CallOutput::Boolean)
            }
            Operation::IsLessThan => {
                comparison::is_less_than(&args[0], &args[1], self.scale_arg(&args[2])?)
                    .map(CallOutput::Boolean)
            }
            Operation::IsGreaterOrEqual => {
                comparison::is_greater_or_equal(&args[0], &args[1], self.scale_arg(&args[2])?)
                    .map(CallOutput::Boolean)
            }
            Operation::IsLessOrEqual => {
                comparison::is_less_or_equal(&args[0], &args[1], self.scale_arg(&args[2])?)
                    .map(CallOutput::Boolean)
            }

            // Transformations
            Operation::AbsoluteValue => {
                transform::absolute_value(&args[0], self.scale_arg(&args[1])?)
                    .map(CallOutput::Integer)
            }
            Operation::GetIntegerPart => {
                transform::get_integer_part(&args[0], self.scale_arg(&args[1])?)
                    .map(CallOutput::Integer)
            }
            Operation::Shift => {
                transform::shift(&args[0], self.scale_arg(&args[1])?, signed_arg(&args[2])?)
                    .map(CallOutput::Integer)
            }
            Operation::RoundTo => {
                transform::round_to(&args[0], self.scale_arg(&args[1])?, unsigned_arg(&args[2])?)
                    .map(CallOutput::Integer)
            }

            // Special functions
            Operation::Exponential => exponential::exponential(&args[0]).map(CallOutput::Integer),
            Operation::NaturalLog => {
                logarithm::natural_log(&args[0], self.scale_arg(&args[1])?).map(CallOutput::Integer)
            }
            Operation::CubicSolve => {
                cubic::cubic_solve(&args[0], &args[1], &args[2], self.scale_arg(&args[3])?)
                    .map(CallOutput::Integer)
            }
            Operation::FullMulDiv => {
                full_math::full_mul_div(&args[0], &args[1], &args[2], self.scale_arg(&args[3])?)
                    .map(CallOutput::Integer)
            }

            // Utilities
            Operation::ToFloatString => {
                components::to_float_string(&args[0], self.scale_arg(&args[1])?)
                    .map(CallOutput::Text)
            }
            Operation::GetComponents => {
                components::get_components(&args[0], self.scale_arg(&args[1])?)
                    .map(components_output)
            }
            Operation::FromComponents => {
                let value = components::from_components(&args[0], signed_arg(&args[1])?)?;
                if value.decimals() > self.config.max_decimals {
                    return Err(CalcError::InvalidArgument);
                }
                Ok(CallOutput::Scaled(value))
            }
            Operation::Normalize => {
                components::normalize(&args[0], signed_arg(&args[1])?).map(components_output)
            }

            // Constants
            Operation::Zero => Ok(CallOutput::Scaled(constants::zero())),
            Operation::One => Ok(CallOutput::Scaled(constants::one())),
            Operation::Two => Ok(CallOutput::Scaled(constants::two())),
            Operation::Ten => Ok(CallOutput::Scaled(constants::ten())),
        }
    }
}

fn components_output((mantissa, exponent): (BigInt, i64)) -> CallOutput {
    CallOutput::Components { mantissa, exponent }
}

fn signed_arg(value: &BigInt) -> CalcResult<i64> {
    value.to_i64().ok_or(CalcError::InvalidArgument)
}

fn unsigned_arg(value: &BigInt) -> CalcResult<u32> {
    value.to_u32().ok_or(CalcError::InvalidArgument)
}

fn parse_integer(text: &str) -> CalcResult<BigInt> {
    text.parse::<BigInt>().map_err(|_| CalcError::InvalidInput)
}
