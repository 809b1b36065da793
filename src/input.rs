use crate::editing::reverse_last_number;
use crate::element::{BinaryOperator, InputElement, Nullary, UnaryOperator};
use crate::error::InputError;
use crate::operators::{get_operator, Operator};
use crate::text;

use tracing::{debug, trace};

/// Digit-count guard applied to the number being typed.
///
/// The parsing rules themselves put no bound on a digit run; the guard is
/// opt-in so that callers can pick their own display limits.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParserConfig {
    pub max_integer_digits: Option<usize>,
    pub max_decimal_digits: Option<usize>,
}

impl ParserConfig {
    /// 15 integer digits and 10 decimal digits.
    pub const fn guarded() -> Self {
        Self {
            max_integer_digits: Some(15),
            max_decimal_digits: Some(10),
        }
    }
}

/// A keystroke, classified.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Key {
    Digit(char),
    Point,
    Binary(BinaryOperator),
    /// The bracket key: opens, or closes when there is something to close.
    Bracket,
    CloseBracket,
    Reverse,
    Nullary(Nullary),
}

impl Key {
    fn from_symbol(symbol: &str) -> Option<Self> {
        let mut chars = symbol.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Some(Self::Digit(c));
            }
        }
        if let Some(op) = get_operator(symbol) {
            return Some(match op {
                Operator::Binary(BinaryOperator::Point) => Self::Point,
                Operator::Binary(op) => Self::Binary(op),
                Operator::Unary(UnaryOperator::OpenBracket) => Self::Bracket,
                Operator::Unary(UnaryOperator::CloseBracket) => Self::CloseBracket,
                Operator::Unary(UnaryOperator::Reverse) => Self::Reverse,
            });
        }
        Nullary::from_symbol(symbol).map(Self::Nullary)
    }

    /// Keys that begin a new operand rather than continue the expression.
    fn starts_value(&self) -> bool {
        matches!(
            self,
            Self::Digit(_) | Self::Point | Self::Bracket | Self::Nullary(_)
        )
    }
}

/// Incrementally validated calculator input.
///
/// Every keystroke goes through [`InputParser::insert`], which either extends
/// the element sequence into another well-formed prefix of an infix
/// expression or rejects the keystroke and leaves the sequence untouched.
#[derive(Clone, Debug)]
pub struct InputParser {
    pub(crate) elements: Vec<InputElement>,
    pub(crate) last_equation: Vec<InputElement>,
    pub(crate) is_equal_used: bool,
    pub(crate) is_last_validation_succeed: bool,
    config: ParserConfig,
}

impl Default for InputParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InputParser {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            elements: Vec::new(),
            last_equation: Vec::new(),
            is_equal_used: false,
            is_last_validation_succeed: true,
            config,
        }
    }

    pub fn config(&self) -> ParserConfig {
        self.config
    }

    pub fn elements(&self) -> &[InputElement] {
        &self.elements
    }

    /// The sequence as it was when [`InputParser::equal`] was last called.
    pub fn last_equation(&self) -> &[InputElement] {
        &self.last_equation
    }

    pub fn is_equal_used(&self) -> bool {
        self.is_equal_used
    }

    /// Whether the last [`InputParser::insert`] was accepted.
    pub fn is_last_validation_succeed(&self) -> bool {
        self.is_last_validation_succeed
    }

    pub fn plain_text(&self) -> String {
        text::plain_text(&self.elements)
    }

    pub fn display_text(&self) -> String {
        text::display_text(&self.elements)
    }

    /// Adds one keystroke symbol: a digit, `.`, `+ - * /`, `(`, `)`, `R`, or a
    /// nullary letter.
    pub fn insert(&mut self, symbol: &str) -> Result<&[InputElement], InputError> {
        let result = Key::from_symbol(symbol)
            .ok_or_else(|| InputError::UnknownSymbol(symbol.to_string()))
            .and_then(|key| self.try_insert(key));
        self.is_last_validation_succeed = result.is_ok();
        match result {
            Ok(()) => {
                trace!(symbol, expression = %self.plain_text(), "accepted keystroke");
                Ok(&self.elements)
            }
            Err(err) => {
                debug!(symbol, error = %err, "rejected keystroke");
                Err(err)
            }
        }
    }

    fn try_insert(&mut self, key: Key) -> Result<(), InputError> {
        // A value typed after `equal` starts a new calculation.
        let mut candidate = if self.is_equal_used && key.starts_value() {
            Vec::new()
        } else {
            self.elements.clone()
        };
        add_element(&mut candidate, key)?;
        if let Key::Digit(_) = key {
            self.check_digit_limits(&candidate)?;
        }
        self.elements = candidate;
        self.is_equal_used = false;
        Ok(())
    }

    fn check_digit_limits(&self, elements: &[InputElement]) -> Result<(), InputError> {
        let number = &elements[number_start(elements)..];
        let (integer, decimal) = match number.iter().position(InputElement::is_point) {
            Some(point) => (&number[..point], &number[point + 1..]),
            None => (number, &[][..]),
        };
        if let Some(limit) = self.config.max_integer_digits {
            if integer.len() > limit {
                return Err(InputError::CantMoreThan15Digit { limit });
            }
        }
        if let Some(limit) = self.config.max_decimal_digits {
            if decimal.len() > limit {
                return Err(InputError::CantMoreThan10Decimal { limit });
            }
        }
        Ok(())
    }
}

/// Index where the trailing run of digits and points begins. Equal to the
/// length when the sequence does not end in a number.
pub(crate) fn number_start(elements: &[InputElement]) -> usize {
    elements
        .iter()
        .rposition(|e| !e.is_number_part())
        .map_or(0, |i| i + 1)
}

pub(crate) fn open_brackets(elements: &[InputElement]) -> usize {
    elements.iter().fold(0usize, |open, e| match e {
        InputElement::Unary(UnaryOperator::OpenBracket) => open + 1,
        InputElement::Unary(UnaryOperator::CloseBracket) => open.saturating_sub(1),
        _ => open,
    })
}

/// Applies `key` to `elements`. On error `elements` may be partially
/// modified, so callers work on a copy.
pub(crate) fn add_element(elements: &mut Vec<InputElement>, key: Key) -> Result<(), InputError> {
    let Some(&last) = elements.last() else {
        return add_to_empty(elements, key);
    };
    match last {
        InputElement::Literal(_) => add_after_literal(elements, key),
        InputElement::Binary {
            operator: BinaryOperator::Point,
            ..
        } => add_after_point(elements, key),
        InputElement::Binary { .. } => add_after_binary(elements, key),
        InputElement::Unary(UnaryOperator::Reverse) => add_after_reverse(elements, key),
        last if last.closes_value() => add_after_value(elements, key),
        // An open bracket, or a function still waiting for its bracket.
        _ => add_after_open_bracket(elements, key),
    }
}

fn add_to_empty(elements: &mut Vec<InputElement>, key: Key) -> Result<(), InputError> {
    match key {
        Key::Digit(_) | Key::Point => push_number_start(elements, key),
        Key::Bracket => elements.push(InputElement::OPEN_BRACKET),
        Key::Nullary(nullary) => push_nullary(elements, nullary),
        Key::Reverse => reverse_last_number(elements),
        Key::Binary(_) | Key::CloseBracket => return Err(InputError::AddingImpossible),
    }
    Ok(())
}

fn add_after_literal(elements: &mut Vec<InputElement>, key: Key) -> Result<(), InputError> {
    match key {
        Key::Digit(digit) => {
            if is_lone_leading_zero(elements) {
                if digit == '0' {
                    return Err(InputError::AddingImpossible);
                }
                elements.pop();
            }
            elements.push(InputElement::Literal(digit));
        }
        Key::Point => {
            if elements[number_start(elements)..]
                .iter()
                .any(InputElement::is_point)
            {
                return Err(InputError::AddingImpossible);
            }
            elements.push(InputElement::POINT);
        }
        Key::Binary(operator) => elements.push(InputElement::binary(operator)),
        Key::Bracket => push_bracket(elements),
        Key::CloseBracket => close_bracket(elements)?,
        Key::Nullary(nullary) => {
            elements.push(InputElement::IMPLICIT_MULTIPLICATION);
            push_nullary(elements, nullary);
        }
        Key::Reverse => reverse_last_number(elements),
    }
    Ok(())
}

/// A point nobody typed digits after yet is dropped as soon as anything but a
/// digit follows.
fn add_after_point(elements: &mut Vec<InputElement>, key: Key) -> Result<(), InputError> {
    match key {
        Key::Digit(digit) => {
            elements.push(InputElement::Literal(digit));
            Ok(())
        }
        Key::Point => Err(InputError::AddingImpossible),
        Key::Reverse => {
            reverse_last_number(elements);
            Ok(())
        }
        _ => {
            elements.pop();
            add_element(elements, key)
        }
    }
}

fn add_after_binary(elements: &mut Vec<InputElement>, key: Key) -> Result<(), InputError> {
    match key {
        Key::Digit(_) | Key::Point => push_number_start(elements, key),
        Key::Binary(operator) => {
            elements.pop();
            elements.push(InputElement::binary(operator));
        }
        Key::Bracket => elements.push(InputElement::OPEN_BRACKET),
        Key::CloseBracket => return Err(InputError::InvalidFormatUsed),
        Key::Nullary(nullary) => push_nullary(elements, nullary),
        Key::Reverse => reverse_last_number(elements),
    }
    Ok(())
}

fn add_after_open_bracket(elements: &mut Vec<InputElement>, key: Key) -> Result<(), InputError> {
    match key {
        Key::Digit(_) | Key::Point => push_number_start(elements, key),
        Key::Bracket => elements.push(InputElement::OPEN_BRACKET),
        Key::Nullary(nullary) => push_nullary(elements, nullary),
        Key::Binary(_) | Key::CloseBracket => return Err(InputError::InvalidFormatUsed),
        Key::Reverse => reverse_last_number(elements),
    }
    Ok(())
}

/// Only a number may be signed.
fn add_after_reverse(elements: &mut Vec<InputElement>, key: Key) -> Result<(), InputError> {
    match key {
        Key::Digit(_) | Key::Point => push_number_start(elements, key),
        Key::Reverse => reverse_last_number(elements),
        _ => return Err(InputError::InvalidFormatUsed),
    }
    Ok(())
}

/// After a `)` or a constant.
fn add_after_value(elements: &mut Vec<InputElement>, key: Key) -> Result<(), InputError> {
    match key {
        Key::Digit(_) | Key::Point => {
            elements.push(InputElement::IMPLICIT_MULTIPLICATION);
            push_number_start(elements, key);
        }
        Key::Binary(operator) => elements.push(InputElement::binary(operator)),
        Key::Bracket => push_bracket(elements),
        Key::CloseBracket => close_bracket(elements)?,
        Key::Nullary(nullary) => {
            elements.push(InputElement::IMPLICIT_MULTIPLICATION);
            push_nullary(elements, nullary);
        }
        Key::Reverse => reverse_last_number(elements),
    }
    Ok(())
}

/// A point with no digit before it gets a leading zero.
fn push_number_start(elements: &mut Vec<InputElement>, key: Key) {
    match key {
        Key::Digit(digit) => elements.push(InputElement::Literal(digit)),
        _ => elements.extend([InputElement::Literal('0'), InputElement::POINT]),
    }
}

fn push_nullary(elements: &mut Vec<InputElement>, nullary: Nullary) {
    elements.push(InputElement::Nullary(nullary));
    if nullary.auto_bracket() {
        elements.push(InputElement::OPEN_BRACKET);
    }
}

/// The bracket key after a value.
fn push_bracket(elements: &mut Vec<InputElement>) {
    if open_brackets(elements) > 0 {
        elements.push(InputElement::CLOSE_BRACKET);
    } else {
        elements.extend([
            InputElement::IMPLICIT_MULTIPLICATION,
            InputElement::OPEN_BRACKET,
        ]);
    }
}

fn close_bracket(elements: &mut Vec<InputElement>) -> Result<(), InputError> {
    if open_brackets(elements) == 0 {
        return Err(InputError::InvalidFormatUsed);
    }
    elements.push(InputElement::CLOSE_BRACKET);
    Ok(())
}

/// The number being typed is exactly `0`, with no point before it.
fn is_lone_leading_zero(elements: &[InputElement]) -> bool {
    let start = number_start(elements);
    elements[start..] == [InputElement::Literal('0')]
}
