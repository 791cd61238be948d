use crate::{
    ast::Node,
    error::ParseError,
    interpreter::lexer::{Spanned, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of lines, operands and boolean terms the parser follows.
pub const MAX_NESTING: usize = 128;

/// A grammar production: consumes tokens on success, reports what it
/// expected on failure.
pub type Production<'t> = fn(&mut Parser<'t>) -> ParseResult<Node>;

/// An ordered-choice, backtracking recursive-descent parser.
///
/// The parser keeps a cursor into the token sequence and an explicit stack of
/// saved cursor positions. Entering an alternative pushes the cursor; if the
/// alternative fails the cursor is restored from the stack and the next
/// alternative is tried, and if it succeeds the saved position is discarded.
/// The first alternative that succeeds wins, so the order of alternatives is
/// part of the grammar.
///
/// The token slice is expected to end with [`Token::Eof`], as produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize).
pub struct Parser<'t> {
    pub(in crate::interpreter::parser) tokens:   &'t [Spanned],
    pub(in crate::interpreter::parser) cursor:   usize,
    saved:                                       Vec<usize>,
    depth:                                       usize,
    /// Deepest failure seen so far, reported when the whole parse fails.
    pub(in crate::interpreter::parser) furthest: Option<ParseError>,
    /// Set once nesting exceeds [`MAX_NESTING`]; fails every later production.
    too_deep:                                    Option<ParseError>,
}

impl<'t> Parser<'t> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'t [Spanned]) -> Self {
        Self { tokens,
               cursor: 0,
               saved: Vec::new(),
               depth: 0,
               furthest: None,
               too_deep: None }
    }

    /// Parses exactly one line and requires the input to end after it.
    ///
    /// On failure the error describes the furthest point any alternative
    /// reached, which is where the input actually stopped making sense.
    ///
    /// # Example
    /// ```
    /// use sapphire::interpreter::{lexer::tokenize, parser::core::Parser};
    ///
    /// let tokens = tokenize("x :- 1 + 2").unwrap();
    /// let node = Parser::new(&tokens).parse_program().unwrap();
    ///
    /// assert_eq!(node.to_string(), "[x <- (+ 1 2)]");
    /// ```
    ///
    /// # Errors
    /// - [`ParseError::TooDeep`] if the input nests more than [`MAX_NESTING`]
    ///   levels anywhere.
    /// - [`ParseError::Expected`] if no line can be parsed or tokens remain
    ///   after it.
    pub fn parse_program(&mut self) -> ParseResult<Node> {
        let result = match self.parse_line() {
            Ok(node) => self.eat(&Token::Eof).map(|_| node),
            Err(error) => Err(error),
        };

        if let Some(error) = self.too_deep.take() {
            return Err(error);
        }
        result.map_err(|error| self.furthest.take().unwrap_or(error))
    }

    /// Parses the next complete line.
    ///
    /// Grammar:
    /// ```text
    ///     line := block | call | conditional | assignment | boolean | expression
    /// ```
    ///
    /// # Errors
    /// Returns [`ParseError::Expected`] if none of the alternatives match.
    pub fn parse_line(&mut self) -> ParseResult<Node> {
        self.nested(|parser| {
                parser.choice("a line",
                              &[Self::parse_block,
                                Self::parse_call,
                                Self::parse_conditional,
                                Self::parse_assignment,
                                Self::parse_boolean,
                                Self::parse_expression])
            })
    }

    /// Runs `production` one nesting level deeper.
    ///
    /// Past [`MAX_NESTING`] levels the parse is abandoned: this and every
    /// later call fails with [`ParseError::TooDeep`], so backtracking cannot
    /// retry its way around the limit.
    pub(in crate::interpreter::parser) fn nested(&mut self,
                                                 production: impl FnOnce(&mut Self)
                                                                         -> ParseResult<Node>)
                                                 -> ParseResult<Node> {
        if self.depth >= MAX_NESTING || self.too_deep.is_some() {
            let error = ParseError::TooDeep { limit: MAX_NESTING,
                                              line:  self.current_line(), };
            return Err(self.too_deep.get_or_insert(error).clone());
        }

        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// Tries each alternative in order and returns the first success.
    ///
    /// Every alternative starts from the same cursor position. When all of
    /// them fail, the error names `expected` at that position.
    pub(in crate::interpreter::parser) fn choice(&mut self,
                                                 expected: &str,
                                                 alternatives: &[Production<'t>])
                                                 -> ParseResult<Node> {
        for alternative in alternatives {
            if let Ok(node) = self.attempt(*alternative) {
                return Ok(node);
            }
        }
        Err(self.expected(expected))
    }

    /// Runs `production`, rolling the cursor back if it fails.
    pub(in crate::interpreter::parser) fn attempt<T>(&mut self,
                                                     production: impl FnOnce(&mut Self)
                                                                             -> ParseResult<T>)
                                                     -> ParseResult<T> {
        self.save();
        let result = production(self);
        if result.is_ok() {
            self.commit();
        } else {
            self.restore();
        }
        result
    }

    fn save(&mut self) {
        self.saved.push(self.cursor);
    }

    fn restore(&mut self) {
        if let Some(position) = self.saved.pop() {
            self.cursor = position;
        }
    }

    fn commit(&mut self) {
        self.saved.pop();
    }
}
