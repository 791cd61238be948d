use crate::{
    ast::{BinaryOperator, Node},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

static END: Token = Token::Eof;

impl Parser<'_> {
    /// Returns the token under the cursor, or [`Token::Eof`] past the end.
    pub(in crate::interpreter::parser) fn peek(&self) -> &Token {
        self.tokens.get(self.cursor).map_or(&END, |(token, _)| token)
    }

    /// Returns the source line of the token under the cursor.
    pub(in crate::interpreter::parser) fn current_line(&self) -> usize {
        self.tokens
            .get(self.cursor)
            .or_else(|| self.tokens.last())
            .map_or(1, |(_, line)| *line)
    }

    pub(in crate::interpreter::parser) fn advance(&mut self) {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
    }

    /// Consumes the expected payload-free token.
    ///
    /// # Returns
    /// The line of the consumed token.
    ///
    /// # Errors
    /// Returns [`ParseError::Expected`] naming `expected` if the current token
    /// differs.
    pub(in crate::interpreter::parser) fn eat(&mut self, expected: &Token) -> ParseResult<usize> {
        if self.peek() == expected {
            let line = self.current_line();
            self.advance();
            return Ok(line);
        }
        Err(self.expected(&expected.to_string()))
    }

    /// Consumes an identifier and returns its name and line.
    pub(in crate::interpreter::parser) fn eat_identifier(&mut self) -> ParseResult<(String, usize)> {
        if let Token::Identifier(name) = self.peek() {
            let name = name.clone();
            let line = self.current_line();
            self.advance();
            return Ok((name, line));
        }
        Err(self.expected("an identifier"))
    }

    /// Consumes a binary operator if it is one of `accepted`.
    ///
    /// # Parameters
    /// - `accepted`: Operators valid at this precedence level.
    /// - `expected`: Description used in the error when nothing matches.
    pub(in crate::interpreter::parser) fn eat_operator(&mut self,
                                                       accepted: &[BinaryOperator],
                                                       expected: &str)
                                                       -> ParseResult<(BinaryOperator, usize)> {
        if let Some(op) = token_to_binary_operator(self.peek())
           && accepted.contains(&op)
        {
            let line = self.current_line();
            self.advance();
            return Ok((op, line));
        }
        Err(self.expected(expected))
    }

    /// Parses a possibly empty list of lines separated by `separator`.
    ///
    /// Grammar (simplified): `list := (line (separator line)*)?`
    ///
    /// A separator that is not followed by a line is left unconsumed.
    pub(in crate::interpreter::parser) fn parse_separated(&mut self, separator: &Token) -> Vec<Node> {
        let mut items = Vec::new();

        if let Ok(first) = self.attempt(Self::parse_line) {
            items.push(first);

            while let Ok(next) = self.attempt(|parser| {
                                         parser.eat(separator)?;
                                         parser.parse_line()
                                     })
            {
                items.push(next);
            }
        }
        items
    }

    /// Builds a [`ParseError::Expected`] at the cursor and remembers it if it
    /// is the furthest failure so far.
    ///
    /// Later failures at the same position replace earlier ones, so the
    /// enclosing production's description wins over its leaves.
    pub(in crate::interpreter::parser) fn expected(&mut self, expected: &str) -> ParseError {
        let error = ParseError::Expected { expected: expected.to_string(),
                                           found:    self.peek().to_string(),
                                           position: self.cursor,
                                           line:     self.current_line(), };

        if self.furthest
               .as_ref()
               .and_then(ParseError::position)
               .is_none_or(|furthest| self.cursor >= furthest)
        {
            self.furthest = Some(error.clone());
        }
        error
    }
}

/// Maps a token to the binary operator it spells, if any.
///
/// # Example
/// ```
/// use sapphire::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::utils::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Xor), Some(BinaryOperator::Xor));
/// assert_eq!(token_to_binary_operator(&Token::Dot), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::Less => Some(BinaryOperator::Less),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Equals => Some(BinaryOperator::Equal),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        Token::Xor => Some(BinaryOperator::Xor),
        _ => None,
    }
}
