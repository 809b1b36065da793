//! Renderings of an element sequence.
//!
//! - [`plain_text`]: canonical symbols, one word per logical token, separated
//!   by single spaces: `( -1 . 5 * S ( 2`.
//! - [`display_text`]: what the user sees: `(−1.5×sin(2`.
//! - [`calculation_text`]: compact canonical symbols fed to the
//!   [`grammar`](crate::grammar_doc): `(-1.5*S(2`.

use crate::element::{InputElement, UnaryOperator};

/// Groups the sequence into words: a digit run is one word, and a reversal
/// right before a digit run becomes its sign.
fn words(
    elements: &[InputElement],
    symbol: impl Fn(&InputElement) -> &'static str,
    sign: &'static str,
) -> Vec<String> {
    let mut words: Vec<String> = Vec::with_capacity(elements.len());
    let mut in_number = false;
    let mut iter = elements.iter().peekable();
    while let Some(element) = iter.next() {
        match element {
            InputElement::Literal(_) if in_number => {
                if let Some(word) = words.last_mut() {
                    word.push_str(symbol(element));
                }
            }
            InputElement::Literal(_) => {
                words.push(symbol(element).to_string());
                in_number = true;
            }
            InputElement::Unary(UnaryOperator::Reverse)
                if matches!(iter.peek(), Some(InputElement::Literal(_))) =>
            {
                words.push(sign.to_string());
                in_number = true;
            }
            _ => {
                words.push(symbol(element).to_string());
                in_number = false;
            }
        }
    }
    words
}

pub fn plain_text(elements: &[InputElement]) -> String {
    words(elements, InputElement::element, "-").join(" ")
}

pub fn display_text(elements: &[InputElement]) -> String {
    words(
        elements,
        InputElement::display_element,
        UnaryOperator::Reverse.display_element(),
    )
    .concat()
}

pub fn calculation_text(elements: &[InputElement]) -> String {
    words(elements, InputElement::element, "-").concat()
}
