use crate::{
    ast::{Atom, Node, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            binary::RELATIONAL_OPERATORS,
            core::{ParseResult, Parser},
        },
    },
};

impl Parser<'_> {
    /// Parses a single boolean term.
    ///
    /// Grammar:
    /// ```text
    ///     unaryBool := "~" boolean
    ///                | "(" boolean ")"
    ///                | expression relop expression
    /// ```
    pub(crate) fn parse_unary_bool(&mut self) -> ParseResult<Node> {
        self.nested(|parser| {
                parser.choice("a boolean",
                              &[Self::parse_not, Self::parse_grouped_boolean, Self::parse_comparison])
            })
    }

    /// `"~" boolean`
    fn parse_not(&mut self) -> ParseResult<Node> {
        let line = self.eat(&Token::Not)?;
        let operand = self.parse_boolean()?;

        Ok(Node::UnaryOp { op: UnaryOperator::Not,
                           operand: Box::new(operand),
                           line })
    }

    /// `"(" boolean ")"`
    fn parse_grouped_boolean(&mut self) -> ParseResult<Node> {
        self.eat(&Token::LParen)?;
        let inner = self.parse_boolean()?;
        self.eat(&Token::RParen)?;
        Ok(inner)
    }

    /// Parses a comparison between two arithmetic expressions.
    ///
    /// Comparisons do not chain: `1 < 2 < 3` leaves the second `<` unparsed.
    ///
    /// Grammar: `expression relop expression` where
    /// `relop := ">" | "<" | ">=" | "<=" | "="`
    fn parse_comparison(&mut self) -> ParseResult<Node> {
        let left = self.parse_expression()?;
        let (op, line) = self.eat_operator(RELATIONAL_OPERATORS, "a comparison operator")?;
        let right = self.parse_expression()?;

        Ok(Node::BinaryOp { left: Box::new(left),
                            op,
                            right: Box::new(right),
                            line })
    }

    /// Parses a unary arithmetic term.
    ///
    /// A sign applies to a whole `expression`, not just the next term, so
    /// `-2 + 3` parses as `-(2 + 3)`.
    ///
    /// Grammar:
    /// ```text
    ///     unary := ("+" | "-") expression
    ///            | "(" expression ")"
    ///            | atom
    /// ```
    pub(crate) fn parse_unary(&mut self) -> ParseResult<Node> {
        self.nested(|parser| {
                parser.choice("an operand",
                              &[Self::parse_signed, Self::parse_grouped_expression, Self::parse_atom])
            })
    }

    /// `("+" | "-") expression`
    fn parse_signed(&mut self) -> ParseResult<Node> {
        let op = match self.peek() {
            Token::Plus => UnaryOperator::Plus,
            Token::Minus => UnaryOperator::Negate,
            _ => return Err(self.expected("'+' or '-'")),
        };
        let line = self.current_line();
        self.advance();
        let operand = self.parse_expression()?;

        Ok(Node::UnaryOp { op,
                           operand: Box::new(operand),
                           line })
    }

    /// `"(" expression ")"`
    fn parse_grouped_expression(&mut self) -> ParseResult<Node> {
        self.eat(&Token::LParen)?;
        let inner = self.parse_expression()?;
        self.eat(&Token::RParen)?;
        Ok(inner)
    }

    /// Parses a literal or identifier.
    ///
    /// Grammar: `atom := STR | NUM | ID`
    pub(crate) fn parse_atom(&mut self) -> ParseResult<Node> {
        let atom = match self.peek() {
            Token::Str(s) => Atom::Str(s.clone()),
            Token::Integer(n) => Atom::Integer(*n),
            Token::Identifier(name) => Atom::Identifier(name.clone()),
            _ => return Err(self.expected("a string, number or identifier")),
        };
        let line = self.current_line();
        self.advance();

        Ok(Node::Atom { atom, line })
    }
}
