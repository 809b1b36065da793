use crate::element::{InputElement, UnaryOperator};
use crate::input::{number_start, InputParser};

use tracing::trace;

impl InputParser {
    /// Toggles the sign of the number being typed. See [`reverse_last_number`].
    pub fn reverse_sign(&mut self) -> &[InputElement] {
        reverse_last_number(&mut self.elements);
        self.is_equal_used = false;
        trace!(expression = %self.plain_text(), "reversed sign");
        &self.elements
    }

    /// Removes the most recently typed unit. Does nothing on an empty
    /// expression.
    pub fn delete_last(&mut self) -> &[InputElement] {
        remove_last(&mut self.elements);
        self.is_equal_used = false;
        trace!(expression = %self.plain_text(), "deleted last");
        &self.elements
    }

    /// Freezes the expression. The sequence itself is not touched; the next
    /// value typed starts a new calculation while [`InputParser::last_equation`]
    /// keeps this one.
    pub fn equal(&mut self) -> &[InputElement] {
        self.is_equal_used = true;
        self.last_equation.clone_from(&self.elements);
        &self.elements
    }

    pub fn clear(&mut self) {
        self.elements.clear();
        self.is_equal_used = false;
        self.is_last_validation_succeed = true;
    }
}

/// Wraps the trailing number in `( R`, or unwraps it if it already is.
///
/// Without a trailing number a `( R` placeholder is appended for the digits to
/// come, and an existing placeholder is removed.
pub(crate) fn reverse_last_number(elements: &mut Vec<InputElement>) {
    let start = number_start(elements);
    if start < elements.len() {
        if start >= 2 && elements[start - 2..start] == SIGNED {
            elements.drain(start - 2..start);
        } else {
            elements.insert(start, InputElement::REVERSE);
            elements.insert(start, InputElement::OPEN_BRACKET);
        }
        return;
    }
    match elements.last() {
        Some(InputElement::Unary(UnaryOperator::Reverse)) => {
            elements.truncate(elements.len().saturating_sub(SIGNED.len()));
            drop_trailing_implicit(elements);
        }
        Some(last) if last.closes_value() => {
            elements.push(InputElement::IMPLICIT_MULTIPLICATION);
            elements.extend(SIGNED);
        }
        _ => elements.extend(SIGNED),
    }
}

const SIGNED: [InputElement; 2] = [InputElement::OPEN_BRACKET, InputElement::REVERSE];

pub(crate) fn remove_last(elements: &mut Vec<InputElement>) {
    let Some(removed) = elements.pop() else {
        return;
    };
    let mut removed_bracket = removed == InputElement::OPEN_BRACKET;
    if removed == InputElement::REVERSE && elements.last() == Some(&InputElement::OPEN_BRACKET) {
        elements.pop();
        removed_bracket = true;
    }

    // A function never outlives its bracket. A bracket typed after the
    // function's own is a unit of its own.
    if !removed_bracket
        && elements.len() >= 2
        && elements[elements.len() - 2].is_function()
        && elements[elements.len() - 1] == InputElement::OPEN_BRACKET
    {
        elements.truncate(elements.len() - 2);
    } else if elements.last().is_some_and(InputElement::is_function) {
        elements.pop();
    }

    drop_trailing_implicit(elements);
}

fn drop_trailing_implicit(elements: &mut Vec<InputElement>) {
    if elements.last().is_some_and(InputElement::is_implicit) {
        elements.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(symbols: &[&str]) -> InputParser {
        let mut parser = InputParser::new();
        for symbol in symbols {
            parser
                .insert(symbol)
                .unwrap_or_else(|e| panic!("{symbol:?} rejected: {e}"));
        }
        parser
    }

    #[test]
    fn reverse_round_trip() {
        let mut parser = typed(&["1"]);
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "( -1");
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "1");
    }

    #[test]
    fn reverse_keeps_decimals() {
        let mut parser = typed(&["1", ".", "1"]);
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "( -1 . 1");
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "1 . 1");

        let mut parser = typed(&["1", "."]);
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "( -1 .");
    }

    #[test]
    fn reverse_only_touches_last_number() {
        let mut parser = typed(&["1", "+", "1"]);
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "1 + ( -1");
        parser.insert("2").unwrap();
        assert_eq!(parser.plain_text(), "1 + ( -12");
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "1 + 12");
    }

    #[test]
    fn reverse_inside_brackets() {
        let mut parser = typed(&["(", "1"]);
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "( ( -1");
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "( 1");
    }

    #[test]
    fn reverse_placeholder_toggles() {
        let mut parser = InputParser::new();
        assert_eq!(parser.reverse_sign(), SIGNED.as_slice());
        assert_eq!(parser.plain_text(), "( R");
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "");

        let mut parser = typed(&["1", "+"]);
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "1 + ( R");
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "1 +");
    }

    #[test]
    fn reverse_after_value_multiplies() {
        let mut parser = typed(&["I"]);
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "I * ( R");
        parser.insert("2").unwrap();
        assert_eq!(parser.plain_text(), "I * ( -2");

        let mut parser = typed(&["I"]);
        parser.reverse_sign();
        parser.reverse_sign();
        assert_eq!(parser.plain_text(), "I");
        assert_eq!(parser.evaluate().unwrap(), std::f64::consts::PI as crate::Real);

        let mut parser = typed(&["(", "1", ")", "R"]);
        assert_eq!(parser.plain_text(), "( 1 ) * ( R");
        parser.insert("R").unwrap();
        assert_eq!(parser.plain_text(), "( 1 )");
    }

    #[test]
    fn reverse_key_is_reverse_sign() {
        let mut parser = typed(&["7", "R"]);
        assert_eq!(parser.plain_text(), "( -7");
        parser.insert("R").unwrap();
        assert_eq!(parser.plain_text(), "7");
    }

    #[test]
    fn delete_digits() {
        let mut parser = typed(&["1", "2", "3"]);
        parser.delete_last();
        assert_eq!(parser.plain_text(), "12");
        parser.delete_last();
        parser.delete_last();
        assert_eq!(parser.plain_text(), "");
    }

    #[test]
    fn delete_to_empty_never_fails() {
        let mut parser = typed(&["(", "1", "+", "S", "2", "(", ")", "*", "I", "R"]);
        for _ in 0..30 {
            parser.delete_last();
        }
        assert_eq!(parser.plain_text(), "");
        assert!(parser.elements().is_empty());
    }

    #[test]
    fn delete_lone_bracket() {
        let mut parser = typed(&["1", "+", "("]);
        parser.delete_last();
        assert_eq!(parser.plain_text(), "1 +");

        let mut parser = typed(&["S", "("]);
        assert_eq!(parser.plain_text(), "S ( (");
        parser.delete_last();
        assert_eq!(parser.plain_text(), "S (");
        parser.delete_last();
        assert_eq!(parser.plain_text(), "");

        let mut parser = typed(&["2", "S", "(", "R"]);
        assert_eq!(parser.plain_text(), "2 * S ( ( R");
        parser.delete_last();
        assert_eq!(parser.plain_text(), "2 * S (");
        parser.delete_last();
        assert_eq!(parser.plain_text(), "2");
    }

    #[test]
    fn delete_function_with_its_bracket() {
        let mut parser = typed(&["S"]);
        parser.delete_last();
        assert_eq!(parser.plain_text(), "");

        let mut parser = typed(&["2", "S", "1"]);
        assert_eq!(parser.plain_text(), "2 * S ( 1");
        parser.delete_last();
        assert_eq!(parser.plain_text(), "2");

        let mut parser = typed(&["S", "1", "2"]);
        parser.delete_last();
        assert_eq!(parser.plain_text(), "S ( 1");
    }

    #[test]
    fn delete_implicit_multiplication() {
        let mut parser = typed(&["3", "I"]);
        parser.delete_last();
        assert_eq!(parser.plain_text(), "3");

        let mut parser = typed(&["(", "1", ")", "4"]);
        parser.delete_last();
        assert_eq!(parser.plain_text(), "( 1 )");
    }

    #[test]
    fn delete_reversal() {
        let mut parser = typed(&["5", "R"]);
        parser.delete_last();
        assert_eq!(parser.plain_text(), "( R");
        parser.delete_last();
        assert_eq!(parser.plain_text(), "");
    }

    #[test]
    fn delete_leaves_dangling_point() {
        let mut parser = typed(&["1", ".", "5"]);
        parser.delete_last();
        assert_eq!(parser.plain_text(), "1 .");
        parser.insert("+").unwrap();
        assert_eq!(parser.plain_text(), "1 +");
    }

    #[test]
    fn equal_closes_nothing() {
        for symbol in ["S", "C", "T", "G", "N", "X", "A"] {
            let mut parser = typed(&[symbol, "1", "("]);
            parser.equal();
            assert_eq!(parser.plain_text(), format!("{symbol} ( 1 )"));
        }
    }

    #[test]
    fn equal_then_new_number() {
        let mut parser = typed(&["1", "+", "1"]);
        parser.equal();
        assert!(parser.is_equal_used());
        assert_eq!(parser.plain_text(), "1 + 1");

        parser.insert("1").unwrap();
        assert_eq!(parser.plain_text(), "1");
        assert!(!parser.is_equal_used());
        parser.insert("1").unwrap();
        assert_eq!(parser.plain_text(), "11");
        parser.insert("1").unwrap();
        assert_eq!(parser.plain_text(), "111");
        assert_eq!(crate::plain_text(parser.last_equation()), "1 + 1");
    }

    #[test]
    fn equal_then_operator_continues() {
        let mut parser = typed(&["1", "+", "1"]);
        parser.equal();
        parser.insert("*").unwrap();
        assert_eq!(parser.plain_text(), "1 + 1 *");
    }

    #[test]
    fn rejected_after_equal_keeps_state() {
        let mut parser = typed(&["1", "+", "1"]);
        parser.equal();
        assert!(parser.insert(")").is_err());
        assert!(parser.is_equal_used());
        assert_eq!(parser.plain_text(), "1 + 1");
    }

    #[test]
    fn clear_resets() {
        let mut parser = typed(&["1", "+", "1"]);
        parser.equal();
        let _ = parser.insert("+");
        let _ = parser.insert("+");
        parser.clear();
        assert_eq!(parser.plain_text(), "");
        assert!(!parser.is_equal_used());
        assert!(parser.is_last_validation_succeed());
        assert_eq!(crate::plain_text(parser.last_equation()), "1 + 1");
    }
}
