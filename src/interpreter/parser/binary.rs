use crate::{
    ast::{BinaryOperator, Node},
    interpreter::parser::core::{ParseResult, Parser, Production},
};

/// Operators accepted between the two sides of a comparison.
pub const RELATIONAL_OPERATORS: &[BinaryOperator] = &[BinaryOperator::Greater,
                                                     BinaryOperator::Less,
                                                     BinaryOperator::GreaterEqual,
                                                     BinaryOperator::LessEqual,
                                                     BinaryOperator::Equal];

impl<'t> Parser<'t> {
    /// Parses logical OR expressions.
    ///
    /// The rule is: `boolean := xor ("||" xor)*`
    pub(crate) fn parse_boolean(&mut self) -> ParseResult<Node> {
        self.fold_left(Self::parse_xor, &[BinaryOperator::Or], "'||'")
    }

    /// Parses logical XOR expressions.
    ///
    /// The rule is: `xor := and ("$" and)*`
    pub(crate) fn parse_xor(&mut self) -> ParseResult<Node> {
        self.fold_left(Self::parse_and, &[BinaryOperator::Xor], "'$'")
    }

    /// Parses logical AND expressions.
    ///
    /// The rule is: `and := unaryBool ("&&" unaryBool)*`
    pub(crate) fn parse_and(&mut self) -> ParseResult<Node> {
        self.fold_left(Self::parse_unary_bool, &[BinaryOperator::And], "'&&'")
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `expression := muldiv (("+" | "-") muldiv)*`
    ///
    /// # Example
    /// ```
    /// use sapphire::parse;
    ///
    /// assert_eq!(parse("1 - 2 + 3").unwrap().to_string(), "(+ (- 1 2) 3)");
    /// ```
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Node> {
        self.fold_left(Self::parse_muldiv,
                       &[BinaryOperator::Add, BinaryOperator::Sub],
                       "'+' or '-'")
    }

    /// Parses multiplication and division expressions.
    ///
    /// The rule is: `muldiv := exps (("*" | "/") exps)*`
    pub(crate) fn parse_muldiv(&mut self) -> ParseResult<Node> {
        self.fold_left(Self::parse_exps,
                       &[BinaryOperator::Mul, BinaryOperator::Div],
                       "'*' or '/'")
    }

    /// Parses exponentiation expressions.
    ///
    /// Like every other level this folds left: `2 ^ 3 ^ 2` parses as
    /// `(2 ^ 3) ^ 2`.
    ///
    /// The rule is: `exps := unary ("^" unary)*`
    pub(crate) fn parse_exps(&mut self) -> ParseResult<Node> {
        self.fold_left(Self::parse_unary, &[BinaryOperator::Pow], "'^'")
    }

    /// Parses `operand (op operand)*` and folds the result to the left.
    ///
    /// Each `op operand` repetition is attempted as a unit: an operator that
    /// is not followed by a valid operand is left unconsumed and the loop
    /// stops.
    ///
    /// # Parameters
    /// - `operand`: Production for the next-higher precedence level.
    /// - `operators`: Operators accepted at this level.
    /// - `expected`: Description of `operators` for diagnostics.
    fn fold_left(&mut self,
                 operand: Production<'t>,
                 operators: &[BinaryOperator],
                 expected: &str)
                 -> ParseResult<Node> {
        let mut left = operand(self)?;

        while let Ok((op, line, right)) = self.attempt(|parser| {
                                                   let (op, line) =
                                                       parser.eat_operator(operators, expected)?;
                                                   let right = operand(parser)?;
                                                   Ok((op, line, right))
                                               })
        {
            left = Node::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }
        Ok(left)
    }
}
