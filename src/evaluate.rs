use crate::element::{BinaryOperator, Nullary};
use crate::error::EvalError;
use crate::expression::Expression;
use crate::input::{open_brackets, InputParser};
use crate::real::Real;
use crate::text::calculation_text;
use crate::FloatExt;

use tracing::{debug, trace};

impl BinaryOperator {
    /// Pairwise arithmetic for the operator.
    pub fn get_result<F: FloatExt>(&self, lhs: F, rhs: F) -> Result<F, EvalError> {
        match self {
            Self::Addition => Ok(lhs + rhs),
            Self::Subtraction => Ok(lhs - rhs),
            Self::Multiplication => Ok(lhs * rhs),
            Self::Division if rhs.is_zero() => Err(EvalError::DivideByZero),
            Self::Division => Ok(lhs / rhs),
            Self::Point => Err(EvalError::NotArithmetic),
        }
    }
}

impl Nullary {
    /// The value of a constant. `None` for functions.
    pub fn value<F: FloatExt>(&self) -> Option<F> {
        match self {
            Self::Pi => Some(F::PI()),
            Self::Euler => Some(F::E()),
            Self::Tau => Some(F::TAU()),
            Self::Sqrt2 => Some(F::SQRT_2()),
            Self::Ln2 => Some(F::LN_2()),
            Self::GoldenRatio => {
                let two = F::one() + F::one();
                F::from(5).map(|five| (F::one() + five.sqrt()) / two)
            }
            _ => None,
        }
    }

    /// Applies a function to its argument. `None` for constants.
    pub fn apply<F: FloatExt>(&self, x: F) -> Option<F> {
        match self {
            Self::Sine => Some(x.sin()),
            Self::Cosine => Some(x.cos()),
            Self::Tangent => Some(x.tan()),
            Self::Log10 => Some(x.log10()),
            Self::NaturalLog => Some(x.ln()),
            Self::SquareRoot => Some(x.sqrt()),
            Self::Absolute => Some(x.abs()),
            _ => None,
        }
    }
}

impl Expression {
    /// Calculates the value of the expression.
    ///
    /// Non-finite results, like the logarithm of a negative number, are
    /// reported as [`EvalError::UndefinedResult`].
    pub fn evaluate(&self) -> Result<Real, EvalError> {
        let value = self.evaluate_recursive()?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::UndefinedResult)
        }
    }

    fn evaluate_recursive(&self) -> Result<Real, EvalError> {
        match self {
            Self::Add(lhs, rhs) => evaluate_binary_op(BinaryOperator::Addition, lhs, rhs),
            Self::Call(function, only) => {
                let argument = only.evaluate_recursive()?;
                function
                    .apply(argument)
                    .ok_or(EvalError::UndefinedResult)
            }
            Self::Constant(constant) => constant.value().ok_or(EvalError::UndefinedResult),
            Self::Div(lhs, rhs) => evaluate_binary_op(BinaryOperator::Division, lhs, rhs),
            Self::Literal(value) => Ok(*value),
            Self::Mul(lhs, rhs) => evaluate_binary_op(BinaryOperator::Multiplication, lhs, rhs),
            Self::Sub(lhs, rhs) => evaluate_binary_op(BinaryOperator::Subtraction, lhs, rhs),
        }
    }
}

fn evaluate_binary_op(
    op: BinaryOperator,
    lhs: &Expression,
    rhs: &Expression,
) -> Result<Real, EvalError> {
    let lhs = lhs.evaluate_recursive()?;
    let rhs = rhs.evaluate_recursive()?;
    op.get_result(lhs, rhs)
}

impl InputParser {
    /// Evaluates the expression typed so far. Brackets still open are closed
    /// first; a dangling operator is an [`EvalError::InvalidFormat`].
    pub fn evaluate(&self) -> Result<Real, EvalError> {
        let mut text = calculation_text(&self.elements);
        text.extend(std::iter::repeat(')').take(open_brackets(&self.elements)));
        let result = Expression::parse(&text)
            .map_err(EvalError::from)
            .and_then(|expression| expression.evaluate());
        match &result {
            Ok(value) => trace!(calculation = %text, value, "evaluated"),
            Err(err) => debug!(calculation = %text, error = %err, "evaluation failed"),
        }
        result
    }
}
