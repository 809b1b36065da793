/// Which sides of an element expect an operand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperandType {
    /// Takes the operand on its left, e.g. `)`.
    Left,
    /// Takes the operand on its right, e.g. `(` or the sign reversal.
    Right,
    /// Infix operators.
    Both,
    /// Values: digits and nullaries.
    None,
}

/// A single keystroke-level element of the expression being typed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputElement {
    /// One digit. Runs of literals form a number.
    Literal(char),
    /// `implicit` is set when the parser inserted the operator on its own.
    Binary {
        operator: BinaryOperator,
        implicit: bool,
    },
    Unary(UnaryOperator),
    Nullary(Nullary),
}

impl InputElement {
    pub const POINT: Self = Self::binary(BinaryOperator::Point);
    pub const OPEN_BRACKET: Self = Self::Unary(UnaryOperator::OpenBracket);
    pub const CLOSE_BRACKET: Self = Self::Unary(UnaryOperator::CloseBracket);
    pub const REVERSE: Self = Self::Unary(UnaryOperator::Reverse);
    pub const IMPLICIT_MULTIPLICATION: Self = Self::Binary {
        operator: BinaryOperator::Multiplication,
        implicit: true,
    };

    pub const fn binary(operator: BinaryOperator) -> Self {
        Self::Binary {
            operator,
            implicit: false,
        }
    }

    /// The canonical symbol used for validation and calculation.
    pub fn element(&self) -> &'static str {
        match self {
            Self::Literal(digit) => digit_str(*digit),
            Self::Binary { operator, .. } => operator.element(),
            Self::Unary(operator) => operator.element(),
            Self::Nullary(nullary) => nullary.element(),
        }
    }

    /// The symbol shown to the user.
    pub fn display_element(&self) -> &'static str {
        match self {
            Self::Literal(digit) => digit_str(*digit),
            Self::Binary { operator, .. } => operator.display_element(),
            Self::Unary(operator) => operator.display_element(),
            Self::Nullary(nullary) => nullary.display_element(),
        }
    }

    pub fn operand_type(&self) -> OperandType {
        match self {
            Self::Literal(_) | Self::Nullary(_) => OperandType::None,
            Self::Binary { .. } => OperandType::Both,
            Self::Unary(operator) => operator.operand_type(),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    pub fn is_point(&self) -> bool {
        *self == Self::POINT
    }

    /// Digits and points, i.e. the parts of a number.
    pub fn is_number_part(&self) -> bool {
        self.is_literal() || self.is_point()
    }

    pub fn is_implicit(&self) -> bool {
        matches!(self, Self::Binary { implicit: true, .. })
    }

    /// A nullary function that is always followed by its own `(`.
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Nullary(nullary) if nullary.auto_bracket())
    }

    /// Ends a complete operand, so a following value needs a multiplication.
    pub fn closes_value(&self) -> bool {
        match self {
            Self::Unary(UnaryOperator::CloseBracket) => true,
            Self::Nullary(nullary) => !nullary.auto_bracket(),
            _ => false,
        }
    }
}

fn digit_str(digit: char) -> &'static str {
    const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
    digit
        .to_digit(10)
        .map(|d| DIGITS[d as usize])
        .unwrap_or("?")
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    /// The decimal point. Glues the integer and fractional digit runs.
    Point,
}

impl BinaryOperator {
    pub fn element(&self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction => "-",
            Self::Multiplication => "*",
            Self::Division => "/",
            Self::Point => ".",
        }
    }

    pub fn display_element(&self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction => "\u{2212}",
            Self::Multiplication => "\u{d7}",
            Self::Division => "\u{f7}",
            Self::Point => ".",
        }
    }

    pub fn priority(&self) -> u8 {
        match self {
            Self::Addition | Self::Subtraction => 1,
            Self::Multiplication | Self::Division => 2,
            Self::Point => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UnaryOperator {
    OpenBracket,
    CloseBracket,
    /// Sign reversal of the number that follows.
    Reverse,
}

impl UnaryOperator {
    pub fn element(&self) -> &'static str {
        match self {
            Self::OpenBracket => "(",
            Self::CloseBracket => ")",
            Self::Reverse => "R",
        }
    }

    pub fn display_element(&self) -> &'static str {
        match self {
            Self::OpenBracket => "(",
            Self::CloseBracket => ")",
            Self::Reverse => "\u{2212}",
        }
    }

    pub fn operand_type(&self) -> OperandType {
        match self {
            Self::CloseBracket => OperandType::Left,
            Self::OpenBracket | Self::Reverse => OperandType::Right,
        }
    }
}

/// Elements that take no left operand: constants and named functions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Nullary {
    Sine,
    Cosine,
    Tangent,
    Log10,
    NaturalLog,
    SquareRoot,
    Absolute,
    Pi,
    Euler,
    Tau,
    Sqrt2,
    Ln2,
    GoldenRatio,
}

impl Nullary {
    pub const ALL: [Nullary; 13] = [
        Self::Sine,
        Self::Cosine,
        Self::Tangent,
        Self::Log10,
        Self::NaturalLog,
        Self::SquareRoot,
        Self::Absolute,
        Self::Pi,
        Self::Euler,
        Self::Tau,
        Self::Sqrt2,
        Self::Ln2,
        Self::GoldenRatio,
    ];

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.element() == symbol)
    }

    pub fn element(&self) -> &'static str {
        match self {
            Self::Sine => "S",
            Self::Cosine => "C",
            Self::Tangent => "T",
            Self::Log10 => "G",
            Self::NaturalLog => "N",
            Self::SquareRoot => "X",
            Self::Absolute => "A",
            Self::Pi => "I",
            Self::Euler => "E",
            Self::Tau => "W",
            Self::Sqrt2 => "P",
            Self::Ln2 => "Q",
            Self::GoldenRatio => "F",
        }
    }

    pub fn display_element(&self) -> &'static str {
        match self {
            Self::Sine => "sin",
            Self::Cosine => "cos",
            Self::Tangent => "tan",
            Self::Log10 => "log",
            Self::NaturalLog => "ln",
            Self::SquareRoot => "\u{221a}",
            Self::Absolute => "abs",
            Self::Pi => "\u{3c0}",
            Self::Euler => "e",
            Self::Tau => "\u{3c4}",
            Self::Sqrt2 => "\u{221a}2",
            Self::Ln2 => "ln2",
            Self::GoldenRatio => "\u{3c6}",
        }
    }

    /// Functions open their argument bracket as soon as they are typed.
    pub fn auto_bracket(&self) -> bool {
        matches!(
            self,
            Self::Sine
                | Self::Cosine
                | Self::Tangent
                | Self::Log10
                | Self::NaturalLog
                | Self::SquareRoot
                | Self::Absolute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_types() {
        assert_eq!(InputElement::Literal('1').operand_type(), OperandType::None);
        assert_eq!(InputElement::POINT.operand_type(), OperandType::Both);
        assert_eq!(InputElement::OPEN_BRACKET.operand_type(), OperandType::Right);
        assert_eq!(InputElement::CLOSE_BRACKET.operand_type(), OperandType::Left);
        assert_eq!(InputElement::REVERSE.operand_type(), OperandType::Right);
        assert_eq!(
            InputElement::Nullary(Nullary::Pi).operand_type(),
            OperandType::None
        );
    }

    #[test]
    fn nullary_symbols() {
        for nullary in Nullary::ALL {
            assert_eq!(Nullary::from_symbol(nullary.element()), Some(nullary));
        }
        assert_eq!(Nullary::from_symbol("Z"), None);
        assert_eq!(Nullary::from_symbol("+"), None);

        let functions: String = Nullary::ALL
            .iter()
            .filter(|n| n.auto_bracket())
            .map(|n| n.element())
            .collect();
        assert_eq!(functions, "SCTGNXA");
    }

    #[test]
    fn multiplication_renders_differently() {
        let mul = InputElement::binary(BinaryOperator::Multiplication);
        assert_eq!(mul.element(), "*");
        assert_eq!(mul.display_element(), "\u{d7}");
        assert!(!mul.is_implicit());
        assert!(InputElement::IMPLICIT_MULTIPLICATION.is_implicit());
        assert_eq!(InputElement::Literal('7').element(), "7");
    }

    #[test]
    fn binary_priorities() {
        use BinaryOperator::*;
        assert_eq!(Addition.priority(), Subtraction.priority());
        assert_eq!(Multiplication.priority(), Division.priority());
        assert!(Multiplication.priority() > Addition.priority());
        assert!(Point.priority() > Division.priority());
        assert_eq!(
            [Addition, Multiplication, Point].map(|op| op.priority()),
            [1, 2, 3]
        );
    }

    #[test]
    fn value_endings() {
        assert!(InputElement::CLOSE_BRACKET.closes_value());
        assert!(InputElement::Nullary(Nullary::Euler).closes_value());
        assert!(!InputElement::Nullary(Nullary::Sine).closes_value());
        assert!(InputElement::Nullary(Nullary::Sine).is_function());
        assert!(!InputElement::Literal('3').closes_value());
    }
}
