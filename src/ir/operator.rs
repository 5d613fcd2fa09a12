//! Operators and literal values carried by data vertices.
//!
//! Operators display as (and parse from) their source token, which is also the
//! label used for the owning vertex in exported artifacts.

use std::fmt;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Operator of a [`BinaryOperation`](crate::ir::BinaryOperation) vertex.
///
/// # Examples
///
/// ```rust
/// use std::str::FromStr;
/// use vertex_ir::ir::BinaryOperator;
///
/// assert_eq!(BinaryOperator::LogicalRightShift.to_string(), ">>>");
/// assert_eq!(BinaryOperator::from_str("<=").unwrap(), BinaryOperator::LessThanEqual);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum BinaryOperator {
    /// `+`
    #[strum(to_string = "+")]
    Add,
    /// `-`
    #[strum(to_string = "-")]
    Sub,
    /// `*`
    #[strum(to_string = "*")]
    Mul,
    /// `/`
    #[strum(to_string = "/")]
    Div,
    /// `%`
    #[strum(to_string = "%")]
    Mod,
    /// `=`
    #[strum(to_string = "=")]
    Assign,
    /// `<`
    #[strum(to_string = "<")]
    LessThan,
    /// `>`
    #[strum(to_string = ">")]
    GreaterThan,
    /// `<=`
    #[strum(to_string = "<=")]
    LessThanEqual,
    /// `>=`
    #[strum(to_string = ">=")]
    GreaterThanEqual,
    /// `==`
    #[strum(to_string = "==")]
    EqualEqual,
    /// `!=`
    #[strum(to_string = "!=")]
    NotEqual,
    /// `===`
    #[strum(to_string = "===")]
    EqualEqualEqual,
    /// `!==`
    #[strum(to_string = "!==")]
    NotEqualEqual,
    /// `&&`
    #[strum(to_string = "&&")]
    And,
    /// `||`
    #[strum(to_string = "||")]
    Or,
    /// `<<`
    #[strum(to_string = "<<")]
    LeftShift,
    /// `>>`
    #[strum(to_string = ">>")]
    ArithmeticRightShift,
    /// `>>>`
    #[strum(to_string = ">>>")]
    LogicalRightShift,
    /// `&`
    #[strum(to_string = "&")]
    BitwiseAnd,
    /// `|`
    #[strum(to_string = "|")]
    BitwiseOr,
    /// `^`
    #[strum(to_string = "^")]
    BitwiseXor,
}

impl BinaryOperator {
    /// Returns `true` if the operator yields a boolean comparison result.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            Self::LessThan
                | Self::GreaterThan
                | Self::LessThanEqual
                | Self::GreaterThanEqual
                | Self::EqualEqual
                | Self::NotEqual
                | Self::EqualEqualEqual
                | Self::NotEqualEqual
        )
    }
}

/// Operator of a prefix or postfix unary operation vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum UnaryOperator {
    /// `+`
    #[strum(to_string = "+")]
    Plus,
    /// `-`
    #[strum(to_string = "-")]
    Minus,
    /// `!`
    #[strum(to_string = "!")]
    Not,
    /// `~`
    #[strum(to_string = "~")]
    BitwiseNot,
    /// `++`
    #[strum(to_string = "++")]
    Increment,
    /// `--`
    #[strum(to_string = "--")]
    Decrement,
    /// `typeof`
    #[strum(to_string = "typeof")]
    TypeOf,
}

/// A literal value held by a [`Literal`](crate::ir::Literal) vertex.
///
/// The display text of the value doubles as the vertex label.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integral number.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// String literal (displayed without quotes).
    String(String),
    /// Boolean literal.
    Boolean(bool),
    /// The `null` literal.
    Null,
    /// The `undefined` literal.
    Undefined,
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Null => write!(f, "null"),
            Value::Undefined => write!(f, "undefined"),
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_binary_operator_tokens_parse_back() {
        for op in BinaryOperator::iter() {
            let token = op.to_string();
            assert_eq!(BinaryOperator::from_str(&token).unwrap(), op, "{token}");
        }
    }

    #[test]
    fn test_unary_operator_tokens() {
        assert_eq!(UnaryOperator::Increment.to_string(), "++");
        assert_eq!(UnaryOperator::from_str("typeof").unwrap(), UnaryOperator::TypeOf);
        assert!(UnaryOperator::from_str("**").is_err());
    }

    #[test]
    fn test_comparison_operators() {
        assert!(BinaryOperator::LessThan.is_comparison());
        assert!(BinaryOperator::NotEqualEqual.is_comparison());
        assert!(!BinaryOperator::Add.is_comparison());
        assert!(!BinaryOperator::And.is_comparison());
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Integer(5).to_string(), "5");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::from("abc").to_string(), "abc");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Undefined.to_string(), "undefined");
    }
}
