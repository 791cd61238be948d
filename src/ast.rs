/// A leaf of the syntax tree: a literal or a reference to a name.
///
/// Atoms are the only nodes a scope normally stores: assigning a variable
/// re-wraps the computed value as a literal atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Atom {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A string literal.
    Str(String),
    /// An identifier, resolved against the scope at evaluation time.
    Identifier(String),
}

impl From<i64> for Atom {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Atom {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Atom {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// An abstract syntax tree (AST) node.
///
/// One parsed line produces exactly one root node. Every variant records the
/// source line it started on for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal or identifier.
    Atom {
        /// The literal or name.
        atom: Atom,
        /// Line number in the source code.
        line: usize,
    },
    /// A prefix operator applied to one operand (`+x`, `-x`, `~x`).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A binary operation (arithmetic, comparison or boolean connective).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name :- value`
    Assignment {
        /// The destination identifier.
        name:  String,
        /// The value-producing line.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `{{ line. line. }}`
    Block {
        /// Lines in evaluation order.
        lines: Vec<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `condition => then !! else`
    Conditional {
        /// The guard.
        condition:   Box<Self>,
        /// Evaluated when the guard is truthy.
        then_branch: Box<Self>,
        /// Evaluated otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `name:{ arg; arg }`
    Call {
        /// Name of the callee.
        callee:    String,
        /// Arguments, left unevaluated for the callee to evaluate.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A function definition.
    ///
    /// The grammar never produces this node. Hosts can build it and bind it
    /// to a name; calling that name then runs the body in a new frame.
    Function(FunctionDef),
}

impl Node {
    /// Creates a literal or identifier node.
    #[must_use]
    pub fn atom(atom: impl Into<Atom>, line: usize) -> Self {
        Self::Atom { atom: atom.into(),
                     line }
    }

    /// Creates an identifier node.
    #[must_use]
    pub fn identifier(name: &str, line: usize) -> Self {
        Self::Atom { atom: Atom::Identifier(name.to_string()),
                     line }
    }

    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use sapphire::ast::Node;
    ///
    /// let node = Node::identifier("x", 5);
    ///
    /// assert_eq!(node.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Atom { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Assignment { line, .. }
            | Self::Block { line, .. }
            | Self::Conditional { line, .. }
            | Self::Call { line, .. } => *line,
            Self::Function(def) => def.line,
        }
    }
}

/// A function definition: parameter names bound to a body.
///
/// Calling it evaluates the arguments in the caller's scope and binds them to
/// the parameters in a copy of that scope.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The parameter names.
    pub params: Vec<String>,
    /// The body evaluated when the function is called.
    pub body:   Box<Node>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and boolean connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`=`)
    Equal,
    /// Logical exclusive or (`$`)
    Xor,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Integer coercion (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`~x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Or, Pow, Sub, Xor,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "=",
            Xor => "$",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "~",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Identifier(name) => write!(f, "${name}"),
        }
    }
}

/// Prints a node in prefix form, e.g. `(+ 1 (* 2 $x))` or `[x <- 5]`.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom { atom, .. } => write!(f, "{atom}"),
            Self::UnaryOp { op, operand, .. } => write!(f, "({op} {operand})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({op} {left} {right})"),
            Self::Assignment { name, value, .. } => write!(f, "[{name} <- {value}]"),
            Self::Block { lines, .. } => {
                write!(f, "[")?;
                write_separated(f, lines)?;
                write!(f, "]")
            },
            Self::Conditional { condition,
                                then_branch,
                                else_branch,
                                .. } => match else_branch {
                Some(else_branch) => write!(f, "(IF {condition} {then_branch} {else_branch})"),
                None => write!(f, "(IF {condition} {then_branch})"),
            },
            Self::Call { callee, arguments, .. } => {
                write!(f, "({callee}")?;
                for argument in arguments {
                    write!(f, " {argument}")?;
                }
                write!(f, ")")
            },
            Self::Function(def) => write!(f, "(func [{}] {})", def.params.join(" "), def.body),
        }
    }
}

fn write_separated(f: &mut std::fmt::Formatter<'_>, nodes: &[Node]) -> std::fmt::Result {
    for (index, node) in nodes.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }
        write!(f, "{node}")?;
    }
    Ok(())
}
