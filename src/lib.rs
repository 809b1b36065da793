//! Keystroke-level calculator input validation.
//!
//! # Why?
//!
//! A calculator keypad produces one symbol at a time, and the display must
//! show a well-formed expression after every single one of them. Instead of
//! re-parsing the whole input on each keystroke, [`InputParser`] keeps the
//! sequence of [`InputElement`]s typed so far and decides locally, from the
//! last element, whether a new symbol is appended, needs an implicit
//! multiplication, closes a bracket, replaces the previous operator or is
//! rejected. A rejected symbol never changes the sequence.
//!
//! Once the user asks for a result the sequence is parsed with a [`pest`]
//! grammar and evaluated.
//!
//! # Example
//!
//! ```rust
//! use keypad_expr::*;
//!
//! let mut parser = InputParser::new();
//! for symbol in ["2", "S", "I", "/", "2", "(", "+", "."] {
//!     parser.insert(symbol).unwrap();
//! }
//! assert_eq!(parser.plain_text(), "2 * S ( I / 2 ) + 0 .");
//!
//! // Nothing to close: rejected, and the expression is left as it was.
//! assert_eq!(parser.insert(")"), Err(InputError::InvalidFormatUsed));
//! assert_eq!(parser.display_text(), "2\u{d7}sin(\u{3c0}\u{f7}2)+0.");
//!
//! let result = parser.evaluate().unwrap();
//! assert!((result - 2.0).abs() < 1e-9);
//! ```

mod editing;
mod element;
mod error;
mod evaluate;
mod expression;
mod input;
mod operators;
mod parse;
mod real;
mod text;

/// Uses the [`pest`] parsing expression grammar language.
///
/// ```text
#[doc = include_str!("grammar.pest")]
/// ```
pub mod grammar_doc {}

pub use element::*;
pub use error::*;
pub use expression::*;
pub use input::{InputParser, ParserConfig};
pub use operators::{get_operator, get_operator_as_input_element, Operator};
pub use parse::{ParseError, Rule};
pub use real::Real;
pub use text::{calculation_text, display_text, plain_text};

pub trait FloatExt:
    num_traits::Float + num_traits::FloatConst + std::str::FromStr + Send + Sync
{
}
impl FloatExt for f32 {}
impl FloatExt for f64 {}
