use std::collections::HashMap;

use crate::element::{BinaryOperator, InputElement, OperandType, UnaryOperator};

use once_cell::sync::Lazy;

/// An operator key on the keypad.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

impl Operator {
    pub fn element(&self) -> &'static str {
        match self {
            Self::Binary(op) => op.element(),
            Self::Unary(op) => op.element(),
        }
    }

    pub fn operand_type(&self) -> OperandType {
        match self {
            Self::Binary(_) => OperandType::Both,
            Self::Unary(op) => op.operand_type(),
        }
    }

    pub fn as_input_element(&self) -> InputElement {
        match *self {
            Self::Binary(op) => InputElement::binary(op),
            Self::Unary(op) => InputElement::Unary(op),
        }
    }
}

static OPERATORS: Lazy<HashMap<&'static str, Operator>> = Lazy::new(|| {
    use BinaryOperator::*;
    use UnaryOperator::*;

    [
        Operator::Binary(Addition),
        Operator::Binary(Subtraction),
        Operator::Binary(Multiplication),
        Operator::Binary(Division),
        Operator::Binary(Point),
        Operator::Unary(OpenBracket),
        Operator::Unary(CloseBracket),
        Operator::Unary(Reverse),
    ]
    .into_iter()
    .map(|op| (op.element(), op))
    .collect()
});

/// Looks up the operator registered for `symbol`. Digits and nullary letters
/// are not operators.
pub fn get_operator(symbol: &str) -> Option<Operator> {
    OPERATORS.get(symbol).copied()
}

pub fn get_operator_as_input_element(symbol: &str) -> Option<InputElement> {
    get_operator(symbol).map(|op| op.as_input_element())
}
