use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Operators are matched longest spelling first, so `>=` never lexes as `>`
/// followed by `=`, and `}}` always closes a block rather than two calls.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, such as `"hello"` or `'hello'`. The content is
    /// taken literally; there are no escapes.
    #[regex(r#""[^"]*""#, parse_string)]
    #[regex(r"'[^']*'", parse_string)]
    Str(String),
    /// Identifier tokens: a run of lowercase letters such as `count`.
    #[regex(r"[a-z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `:-`
    #[token(":-")]
    Assign,
    /// `:{`
    #[token(":{")]
    CallStart,
    /// `}`
    #[token("}")]
    CallEnd,
    /// `{{`
    #[token("{{")]
    BlockStart,
    /// `}}`
    #[token("}}")]
    BlockEnd,
    /// `=>`
    #[token("=>")]
    Then,
    /// `!!`
    #[token("!!")]
    Else,
    /// `||`
    #[token("||")]
    Or,
    /// `&&`
    #[token("&&")]
    And,
    /// `$`
    #[token("$")]
    Xor,
    /// `~`
    #[token("~")]
    Not,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `.` terminates a line inside a block.
    #[token(".")]
    Dot,
    /// `;` separates call arguments.
    #[token(";")]
    Semicolon,
    /// Internal: the newline rule only advances the line counter and then
    /// skips, so this variant never appears in the token stream.
    #[doc(hidden)]
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// End of input. Never produced by logos itself; [`Tokenizer`] appends it
    /// once the source is exhausted.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token paired with the line it starts on.
pub type Spanned = (Token, usize);

/// Lazily tokenizes a source string.
///
/// Yields `Ok((token, line))` for every token, then a single
/// [`Token::Eof`], then `None`. The first lexical error is yielded as `Err`
/// and ends the sequence: an unmatched character is never skipped.
///
/// # Example
/// ```
/// use sapphire::interpreter::lexer::{Token, Tokenizer};
///
/// let tokens: Vec<Token> = Tokenizer::new("x :- 5").map(|t| t.unwrap().0).collect();
///
/// assert_eq!(tokens,
///            vec![Token::Identifier("x".into()), Token::Assign, Token::Integer(5), Token::Eof]);
/// ```
pub struct Tokenizer<'src> {
    lexer:    logos::Lexer<'src, Token>,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    Token::lexer_with_extras(source, LexerExtras { line: 1 }),
               finished: false, }
    }

    fn lexical_error(&self) -> ParseError {
        let text = self.lexer.slice();
        let line = self.lexer.extras.line;

        if text.starts_with(['"', '\'']) {
            ParseError::UnterminatedString { line }
        } else if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            ParseError::LiteralTooLarge { line }
        } else {
            ParseError::UnrecognizedInput { text: text.to_string(),
                                            line }
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Spanned, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.lexer.next() {
            Some(Ok(token)) => {
                let line = self.lexer.extras.line;
                // String literals may span lines.
                self.lexer.extras.line += self.lexer.slice().matches('\n').count();
                Some(Ok((token, line)))
            },
            Some(Err(())) => {
                self.finished = true;
                Some(Err(self.lexical_error()))
            },
            None => {
                self.finished = true;
                Some(Ok((Token::Eof, self.lexer.extras.line)))
            },
        }
    }
}

/// Tokenizes a whole source string.
///
/// The returned vector always ends with [`Token::Eof`].
///
/// # Errors
/// Returns the first lexical error: an unrecognized character, an unterminated
/// string, or an integer literal that does not fit in an `i64`.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    Tokenizer::new(source).collect()
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits do not fit in an `i64`, which logos turns
/// into a lexical error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quote characters from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let spelling = match self {
            Self::Integer(n) => return write!(f, "number {n}"),
            Self::Str(s) => return write!(f, "string \"{s}\""),
            Self::Identifier(name) => return write!(f, "identifier '{name}'"),
            Self::Eof => return write!(f, "end of input"),
            Self::NewLine => "\\n",
            Self::Assign => ":-",
            Self::CallStart => ":{",
            Self::CallEnd => "}",
            Self::BlockStart => "{{",
            Self::BlockEnd => "}}",
            Self::Then => "=>",
            Self::Else => "!!",
            Self::Or => "||",
            Self::And => "&&",
            Self::Xor => "$",
            Self::Not => "~",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equals => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Dot => ".",
            Self::Semicolon => ";",
        };
        write!(f, "'{spelling}'")
    }
}
