use crate::{
    ast::Node,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Production},
    },
};

impl<'t> Parser<'t> {
    /// Parses a conditional.
    ///
    /// The guard is tried as a `boolean` first and as a bare `expression`
    /// second, so `x => ...` is accepted and tests the truthiness of `x`.
    /// The else branch is optional.
    ///
    /// Grammar:
    /// ```text
    ///     conditional := (boolean | expression) "=>" line ("!!" line)?
    /// ```
    pub(crate) fn parse_conditional(&mut self) -> ParseResult<Node> {
        self.choice("a conditional",
                    &[Self::parse_boolean_conditional, Self::parse_expression_conditional])
    }

    fn parse_boolean_conditional(&mut self) -> ParseResult<Node> {
        self.parse_guarded(Self::parse_boolean)
    }

    fn parse_expression_conditional(&mut self) -> ParseResult<Node> {
        self.parse_guarded(Self::parse_expression)
    }

    fn parse_guarded(&mut self, guard: Production<'t>) -> ParseResult<Node> {
        let condition = guard(self)?;
        self.eat(&Token::Then)?;
        let then_branch = self.parse_line()?;
        let else_branch = self.attempt(|parser| {
                                  parser.eat(&Token::Else)?;
                                  parser.parse_line()
                              })
                              .ok()
                              .map(Box::new);

        Ok(Node::Conditional { line: condition.line_number(),
                               condition: Box::new(condition),
                               then_branch: Box::new(then_branch),
                               else_branch })
    }

    /// Parses an assignment.
    ///
    /// The right-hand side is a full line, so blocks, calls and conditionals
    /// can be assigned directly.
    ///
    /// Grammar: `assignment := ID ":-" line`
    pub(crate) fn parse_assignment(&mut self) -> ParseResult<Node> {
        let (name, line) = self.eat_identifier()?;
        self.eat(&Token::Assign)?;
        let value = self.parse_line()?;

        Ok(Node::Assignment { name,
                              value: Box::new(value),
                              line })
    }
}
