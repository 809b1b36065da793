use crate::element::Nullary;
use crate::expression::Expression;
use crate::real::Real;

use once_cell::sync::Lazy;
use pest::error::ErrorVariant;
use pest::iterators::Pair;
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "grammar.pest"] // relative to project `src`
struct ExpressionParser;

pub type ParseError = pest::error::Error<Rule>;

impl Expression {
    /// Parse a calculation text, as produced by
    /// [`calculation_text`](crate::calculation_text), e.g. `2*S(I/2)+(-1.5`
    /// once its brackets are closed.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let pairs = ExpressionParser::parse(Rule::calculation, input)?;
        climb_recursive(pairs.filter(|pair| pair.as_rule() != Rule::EOI))
    }
}

static PRATT_PARSER: Lazy<PrattParser<Rule>> = Lazy::new(|| {
    use Assoc::*;
    use Rule::*;

    PrattParser::new()
        .op(Op::infix(add, Left) | Op::infix(subtract, Left))
        .op(Op::infix(multiply, Left) | Op::infix(divide, Left))
});

fn climb_recursive<'i>(
    input: impl Iterator<Item = Pair<'i, Rule>>,
) -> Result<Expression, ParseError> {
    PRATT_PARSER
        .map_primary(|pair: Pair<Rule>| match pair.as_rule() {
            Rule::real_expr => climb_recursive(pair.into_inner()),
            Rule::real_literal => pair
                .as_str()
                .parse::<Real>()
                .map(Expression::Literal)
                .map_err(|err| custom_error(&pair, format!("bad literal: {err}"))),
            Rule::constant => Ok(Expression::Constant(nullary(&pair)?)),
            Rule::call => {
                let span_pair = pair.clone();
                let mut inner = pair.into_inner();
                match (inner.next(), inner.next()) {
                    (Some(function), Some(argument)) => Ok(Expression::Call(
                        nullary(&function)?,
                        Box::new(climb_recursive(argument.into_inner())?),
                    )),
                    _ => Err(custom_error(&span_pair, "incomplete call".to_string())),
                }
            }
            x => panic!("Unexpected primary rule {x:?}"),
        })
        .map_infix(|lhs, op: Pair<Rule>, rhs| {
            let (lhs, rhs) = (Box::new(lhs?), Box::new(rhs?));
            Ok(match op.as_rule() {
                Rule::add => Expression::Add(lhs, rhs),
                Rule::subtract => Expression::Sub(lhs, rhs),
                Rule::multiply => Expression::Mul(lhs, rhs),
                Rule::divide => Expression::Div(lhs, rhs),
                x => panic!("Unexpected operator {x:?}"),
            })
        })
        .parse(input)
}

fn nullary(pair: &Pair<Rule>) -> Result<Nullary, ParseError> {
    Nullary::from_symbol(pair.as_str())
        .ok_or_else(|| custom_error(pair, format!("unknown nullary {:?}", pair.as_str())))
}

fn custom_error(pair: &Pair<Rule>, message: String) -> ParseError {
    ParseError::new_from_span(ErrorVariant::CustomError { message }, pair.as_span())
}
