use crate::element::Nullary;
use crate::real::Real;

/// A complete calculation, ready for evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    // Binary real ops.
    Add(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),

    // A function nullary applied to its bracketed argument.
    Call(Nullary, Box<Expression>),

    // A constant nullary.
    Constant(Nullary),

    // Number literal, sign included.
    Literal(Real),
}
