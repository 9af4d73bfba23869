//! Binary and Unary Operators
//!
//! The operator set is closed. Symbols are parsed once when a node is built,
//! so evaluation dispatches over these enums exhaustively and never sees an
//! unknown operator.

use std::fmt;
use std::str::FromStr;

/// An operator symbol that names no known operator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator `{symbol}`")]
pub struct OperatorError {
    pub symbol: String,
}

impl OperatorError {
    fn new(symbol: &str) -> Self {
        OperatorError {
            symbol: symbol.to_string(),
        }
    }
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    /// `/`: floor division.
    FloorDiv,
    /// `%`: remainder with the sign of the divisor.
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Every binary operator, in declaration order.
    pub const ALL: [BinaryOp; 13] = [
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::FloorDiv,
        Self::Mod,
        Self::Eq,
        Self::NotEq,
        Self::Lt,
        Self::LtEq,
        Self::Gt,
        Self::GtEq,
        Self::And,
        Self::Or,
    ];

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            // Arithmetic
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::FloorDiv => "/",
            Self::Mod => "%",
            // Comparison
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            // Logical
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Whether the result is always a 0/1 boolean.
    pub const fn is_boolean(self) -> bool {
        !matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::FloorDiv | Self::Mod
        )
    }
}

impl FromStr for BinaryOp {
    type Err = OperatorError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_symbol() == symbol)
            .ok_or_else(|| OperatorError::new(symbol))
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-`: arithmetic negation.
    Neg,
    /// `!`: logical not, nonzero is true.
    Not,
}

impl UnaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
        }
    }
}

impl FromStr for UnaryOp {
    type Err = OperatorError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "-" => Ok(Self::Neg),
            "!" => Ok(Self::Not),
            _ => Err(OperatorError::new(symbol)),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn binary_symbols_round_trip() {
        for op in BinaryOp::ALL {
            assert_eq!(op.as_symbol().parse::<BinaryOp>().unwrap(), op);
        }
    }

    #[test]
    fn slash_is_floor_division() {
        assert_eq!("/".parse::<BinaryOp>().unwrap(), BinaryOp::FloorDiv);
    }

    #[test]
    fn unknown_binary_symbol() {
        assert_eq!(
            "**".parse::<BinaryOp>(),
            Err(OperatorError {
                symbol: "**".to_string()
            })
        );
        assert!("&".parse::<BinaryOp>().is_err());
        assert!("".parse::<BinaryOp>().is_err());
    }

    #[test]
    fn unary_symbols() {
        assert_eq!("-".parse::<UnaryOp>().unwrap(), UnaryOp::Neg);
        assert_eq!("!".parse::<UnaryOp>().unwrap(), UnaryOp::Not);
        assert!("~".parse::<UnaryOp>().is_err());
        assert!("+".parse::<UnaryOp>().is_err());
    }

    #[test]
    fn boolean_operators() {
        assert!(BinaryOp::And.is_boolean());
        assert!(BinaryOp::LtEq.is_boolean());
        assert!(!BinaryOp::Mod.is_boolean());
    }

    #[test]
    fn error_message_names_symbol() {
        let err = "^".parse::<UnaryOp>().unwrap_err();
        assert_eq!(err.to_string(), "unknown operator `^`");
    }
}
