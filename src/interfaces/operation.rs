// ============================================================================
// Operation Registry
// Names, categories and input signatures of every exposed operation
// ============================================================================

use crate::numeric::{CalcError, ScaledInteger};
use num_bigint::BigInt;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================

/// Grouping of operations, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Arithmetic,
    Comparisons,
    Transformations,
    Special,
    Utilities,
    Constants,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Arithmetic,
        Category::Comparisons,
        Category::Transformations,
        Category::Special,
        Category::Utilities,
        Category::Constants,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Arithmetic => "arithmetic",
            Category::Comparisons => "comparisons",
            Category::Transformations => "transformations",
            Category::Special => "special",
            Category::Utilities => "utilities",
            Category::Constants => "constants",
        }
    }

    /// Operations in this category, in registry order
    pub fn operations(self) -> impl Iterator<Item = Operation> {
        Operation::ALL
            .into_iter()
            .filter(move |op| op.category() == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Input Signature
// ============================================================================

/// How a positional argument is interpreted by text adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputKind {
    /// Decimal text, scaled by the call's `decimals` argument
    Decimal,
    /// Signed integer, passed through as-is
    Int256,
    /// Unsigned integer (scales, digit counts)
    Uint256,
}

impl InputKind {
    pub fn name(&self) -> &'static str {
        match self {
            InputKind::Decimal => "decimal",
            InputKind::Int256 => "int256",
            InputKind::Uint256 => "uint256",
        }
    }
}

/// One positional argument of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSpec {
    pub name: &'static str,
    pub kind: InputKind,
    /// Sample value, used when a text argument is left blank
    pub placeholder: &'static str,
}

macro_rules! inputs {
    ($($name:literal : $kind:ident = $placeholder:literal),* $(,)?) => {
        &[$(InputSpec {
            name: $name,
            kind: InputKind::$kind,
            placeholder: $placeholder,
        }),*]
    };
}

// ============================================================================
// Operation
// ============================================================================

/// Every operation reachable through the calculator, keyed by its external name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Operation {
    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Negate,

    // Comparisons
    IsEqual,
    IsGreaterThan,
    IsLessThan,
    IsGreaterOrEqual,
    IsLessOrEqual,

    // Transformations
    AbsoluteValue,
    GetIntegerPart,
    Shift,
    RoundTo,

    // Special functions
    Exponential,
    NaturalLog,
    CubicSolve,
    FullMulDiv,

    // Utilities
    ToFloatString,
    GetComponents,
    FromComponents,
    Normalize,

    // Constants
    Zero,
    One,
    Two,
    Ten,
}

impl Operation {
    pub const ALL: [Operation; 26] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Negate,
        Operation::IsEqual,
        Operation::IsGreaterThan,
        Operation::IsLessThan,
        Operation::IsGreaterOrEqual,
        Operation::IsLessOrEqual,
        Operation::AbsoluteValue,
        Operation::GetIntegerPart,
        Operation::Shift,
        Operation::RoundTo,
        Operation::Exponential,
        Operation::NaturalLog,
        Operation::CubicSolve,
        Operation::FullMulDiv,
        Operation::ToFloatString,
        Operation::GetComponents,
        Operation::FromComponents,
        Operation::Normalize,
        Operation::Zero,
        Operation::One,
        Operation::Two,
        Operation::Ten,
    ];

    /// External name of the operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Negate => "negate",
            Operation::IsEqual => "isEqual",
            Operation::IsGreaterThan => "isGreaterThan",
            Operation::IsLessThan => "isLessThan",
            Operation::IsGreaterOrEqual => "isGreaterOrEqual",
            Operation::IsLessOrEqual => "isLessOrEqual",
            Operation::AbsoluteValue => "absoluteValue",
            Operation::GetIntegerPart => "getIntegerPart",
            Operation::Shift => "shift",
            Operation::RoundTo => "roundTo",
            Operation::Exponential => "exponential",
            Operation::NaturalLog => "naturalLog",
            Operation::CubicSolve => "cubicSolve",
            Operation::FullMulDiv => "fullMulDiv",
            Operation::ToFloatString => "toFloatString",
            Operation::GetComponents => "getComponents",
            Operation::FromComponents => "fromComponents",
            Operation::Normalize => "normalize",
            Operation::Zero => "zero",
            Operation::One => "one",
            Operation::Two => "two",
            Operation::Ten => "ten",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Negate => Category::Arithmetic,

            Operation::IsEqual
            | Operation::IsGreaterThan
            | Operation::IsLessThan
            | Operation::IsGreaterOrEqual
            | Operation::IsLessOrEqual => Category::Comparisons,

            Operation::AbsoluteValue
            | Operation::GetIntegerPart
            | Operation::Shift
            | Operation::RoundTo => Category::Transformations,

            Operation::Exponential
            | Operation::NaturalLog
            | Operation::CubicSolve
            | Operation::FullMulDiv => Category::Special,

            Operation::ToFloatString
            | Operation::GetComponents
            | Operation::FromComponents
            | Operation::Normalize => Category::Utilities,

            Operation::Zero | Operation::One | Operation::Two | Operation::Ten => {
                Category::Constants
            }
        }
    }

    /// Positional arguments, in call order
    pub fn inputs(&self) -> &'static [InputSpec] {
        match self {
            Operation::Add => inputs!["a": Decimal = "1.5", "b": Decimal = "2.5", "decimals": Uint256 = "18"],
            Operation::Subtract => inputs!["a": Decimal = "5.0", "b": Decimal = "2.0", "decimals": Uint256 = "18"],
            Operation::Multiply => inputs!["a": Decimal = "2.5", "b": Decimal = "4.0", "decimals": Uint256 = "18"],
            Operation::Divide => inputs!["a": Decimal = "10.0", "b": Decimal = "4.0", "decimals": Uint256 = "18"],
            Operation::Negate => inputs!["a": Decimal = "5.0", "decimals": Uint256 = "18"],

            Operation::IsEqual => inputs!["a": Decimal = "1.0", "b": Decimal = "1.0", "decimals": Uint256 = "18"],
            Operation::IsGreaterThan => inputs!["a": Decimal = "2.0", "b": Decimal = "1.0", "decimals": Uint256 = "18"],
            Operation::IsLessThan => inputs!["a": Decimal = "1.0", "b": Decimal = "2.0", "decimals": Uint256 = "18"],
            Operation::IsGreaterOrEqual => inputs!["a": Decimal = "2.0", "b": Decimal = "2.0", "decimals": Uint256 = "18"],
            Operation::IsLessOrEqual => inputs!["a": Decimal = "1.0", "b": Decimal = "2.0", "decimals": Uint256 = "18"],

            Operation::AbsoluteValue => inputs!["a": Decimal = "-5.5", "decimals": Uint256 = "18"],
            Operation::GetIntegerPart => inputs!["a": Decimal = "3.14159", "decimals": Uint256 = "18"],
            Operation::Shift => inputs!["a": Decimal = "1.5", "decimals": Uint256 = "18", "places": Int256 = "2"],
            Operation::RoundTo => inputs!["a": Decimal = "3.14159", "decimals": Uint256 = "18", "digits": Uint256 = "3"],

            Operation::Exponential => inputs!["a": Int256 = "1000000000000000000"],
            Operation::NaturalLog => inputs!["a": Decimal = "2.718281828", "decimals": Uint256 = "18"],
            Operation::CubicSolve => inputs![
                "b": Decimal = "0",
                "c": Decimal = "-1",
                "d": Decimal = "0",
                "decimals": Uint256 = "18",
            ],
            Operation::FullMulDiv => inputs![
                "a": Decimal = "2.0",
                "b": Decimal = "3.0",
                "c": Decimal = "4.0",
                "decimals": Uint256 = "18",
            ],

            Operation::ToFloatString => inputs!["value": Decimal = "123.456", "decimals": Uint256 = "18"],
            Operation::GetComponents => inputs!["value": Decimal = "1.5", "decimals": Uint256 = "18"],
            Operation::FromComponents => inputs!["mantissa": Int256 = "150000000000000000", "exponent": Int256 = "-17"],
            Operation::Normalize => inputs!["mantissa": Int256 = "1500", "exponent": Int256 = "0"],

            Operation::Zero | Operation::One | Operation::Two | Operation::Ten => inputs![],
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.inputs().len()
    }

    /// Position of the `decimals` argument, if the operation takes one
    pub fn decimals_position(&self) -> Option<usize> {
        self.inputs().iter().position(|input| input.name == "decimals")
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or(CalcError::UnknownOperation)
    }
}

// ============================================================================
// Call Output
// ============================================================================

/// Result of a successful call
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CallOutput {
    /// Scaled mantissa or plain integer
    Integer(BigInt),
    Boolean(bool),
    Text(String),
    /// Normalized `(mantissa, exponent)` pair
    Components { mantissa: BigInt, exponent: i64 },
    /// Value carrying its own scale
    Scaled(ScaledInteger),
}

impl CallOutput {
    /// The integer payload, if this output carries one
    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            CallOutput::Integer(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CallOutput::Boolean(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for CallOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallOutput::Integer(value) => write!(f, "{}", value),
            CallOutput::Boolean(value) => f.write_str(if *value { "true" } else { "false" }),
            CallOutput::Text(text) => f.write_str(text),
            CallOutput::Components { mantissa, exponent } => write!(f, "{}, {}", mantissa, exponent),
            CallOutput::Scaled(value) => write!(f, "{}", value),
        }
    }
}
