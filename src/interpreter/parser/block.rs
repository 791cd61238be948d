use crate::{
    ast::Node,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block of lines.
    ///
    /// Every line inside the block is terminated by a `.`, including the last
    /// one. An empty block `{{ }}` is accepted.
    ///
    /// Grammar: `block := "{{" (line ".")* "}}"`
    ///
    /// # Example
    /// ```
    /// use sapphire::parse;
    ///
    /// let node = parse("{{ x :- 1. y :- 2. }}").unwrap();
    /// assert_eq!(node.to_string(), "[[x <- 1] [y <- 2]]");
    /// ```
    pub(crate) fn parse_block(&mut self) -> ParseResult<Node> {
        let line = self.eat(&Token::BlockStart)?;
        let mut lines = Vec::new();

        while let Ok(node) = self.attempt(|parser| {
                                     let node = parser.parse_line()?;
                                     parser.eat(&Token::Dot)?;
                                     Ok(node)
                                 })
        {
            lines.push(node);
        }

        self.eat(&Token::BlockEnd)?;
        Ok(Node::Block { lines, line })
    }

    /// Parses a call to a named function.
    ///
    /// Arguments are full lines separated by `;`. Zero arguments are allowed.
    ///
    /// Grammar: `call := ID ":{" (line (";" line)*)? "}"`
    ///
    /// # Example
    /// ```
    /// use sapphire::parse;
    ///
    /// let node = parse("print:{1; x :- 2}").unwrap();
    /// assert_eq!(node.to_string(), "(print 1 [x <- 2])");
    /// ```
    pub(crate) fn parse_call(&mut self) -> ParseResult<Node> {
        let (callee, line) = self.eat_identifier()?;
        self.eat(&Token::CallStart)?;
        let arguments = self.parse_separated(&Token::Semicolon);
        self.eat(&Token::CallEnd)?;

        Ok(Node::Call { callee,
                        arguments,
                        line })
    }
}
