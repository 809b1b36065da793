use crate::parse::ParseError;

use thiserror::Error;

/// Why a keystroke was rejected. The expression is never modified by a
/// rejected keystroke.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InputError {
    /// Nonsensical input the caller should ignore without feedback.
    #[error("adding impossible")]
    AddingImpossible,
    #[error("Invalid format used.")]
    InvalidFormatUsed,
    #[error("Can't enter more than {limit} digits.")]
    CantMoreThan15Digit { limit: usize },
    #[error("Can't enter more than {limit} digits after decimal point.")]
    CantMoreThan10Decimal { limit: usize },
    #[error("unknown symbol {0:?}")]
    UnknownSymbol(String),
}

#[derive(Debug, Error)]
pub enum EvalError {
    #[error("divide by zero")]
    DivideByZero,
    #[error("invalid format: {0}")]
    InvalidFormat(#[from] Box<ParseError>),
    #[error("result is undefined")]
    UndefinedResult,
    #[error("the decimal point is not an arithmetic operator")]
    NotArithmetic,
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        Self::InvalidFormat(Box::new(err))
    }
}
