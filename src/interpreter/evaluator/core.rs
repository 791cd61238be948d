use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::Node,
    error::{RuntimeError, Warning},
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Deepest nesting of [`Scope::eval`] calls, counting calls into function
/// bodies.
pub const MAX_EVAL_DEPTH: usize = 256;

/// Signature of a host-provided built-in.
///
/// A built-in receives the raw, unevaluated argument nodes, the live scope and
/// the line of the call. It decides itself which arguments to evaluate (via
/// [`Scope::eval`]) and in which order, and may read and write the scope.
pub type BuiltinFn = dyn Fn(&[Node], &mut Scope, usize) -> EvalResult<Option<Value>>;

/// What a name in the scope is bound to.
#[derive(Clone)]
pub enum Binding {
    /// A syntax tree, normally a literal atom produced by an assignment.
    ///
    /// Reading the name evaluates the node. A [`Node::Function`] binding makes
    /// the name callable.
    Node(Rc<Node>),
    /// A host-provided built-in function.
    Builtin(Rc<BuiltinFn>),
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(node) => write!(f, "Node({node})"),
            Self::Builtin(_) => write!(f, "Builtin"),
        }
    }
}

/// Stores the runtime evaluation state.
///
/// The scope is a single flat mapping from names to [`Binding`]s, shared by
/// everything evaluated in one run: there is no block-local shadowing, and
/// built-ins see and modify the same bindings as the code calling them.
///
/// ## Usage
///
/// Create a scope once per run, pre-populate it with host values and
/// built-ins, and pass it to every evaluation:
///
/// ```
/// use sapphire::{interpreter::{evaluator::core::Scope, value::core::Value}, run};
///
/// let mut scope = Scope::new();
/// scope.define_value("base", 40);
///
/// run("answer :- base + 2", &mut scope).unwrap();
/// let answer = run("answer", &mut scope).unwrap();
///
/// assert_eq!(answer, Some(Value::Integer(42)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Scope {
    pub(crate) bindings: HashMap<String, Binding>,
    pub(crate) warnings: Vec<Warning>,
    pub(crate) depth:    usize,
}

impl Scope {
    /// Creates an empty scope with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scope with the standard library (`print`, `prompt`,
    /// `assert`) already registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut scope = Self::new();
        crate::interpreter::evaluator::function::core::register_builtins(&mut scope);
        scope
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// on the node variant; see the individual `eval_*` methods for the
    /// semantics of each.
    ///
    /// # Returns
    /// `Some(Value)` for nodes that produce a value, or `None` for empty
    /// blocks, conditionals without a taken branch, and calls that return
    /// nothing.
    ///
    /// # Errors
    /// Any [`RuntimeError`]; evaluation stops at the first one. Nesting more
    /// than [`MAX_EVAL_DEPTH`] evaluations is a `RecursionLimit` error.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        if self.depth >= MAX_EVAL_DEPTH {
            return Err(RuntimeError::RecursionLimit { limit: MAX_EVAL_DEPTH,
                                                      line:  node.line_number(), });
        }

        self.depth += 1;
        let result = self.eval_node(node);
        self.depth -= 1;
        result
    }

    fn eval_node(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        match node {
            Node::Atom { atom, line } => self.eval_atom(atom, *line).map(Some),
            Node::UnaryOp { op, operand, line } => {
                let value = self.eval_child(operand, *line)?;
                Self::eval_unary(*op, &value, *line).map(Some)
            },
            Node::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval_child(left, *line)?;
                let right = self.eval_child(right, *line)?;
                Self::eval_binary(*op, &left, &right, *line).map(Some)
            },
            Node::Assignment { name, value, line } => {
                self.eval_assignment(name, value, *line).map(Some)
            },
            Node::Block { lines, .. } => self.eval_block(lines),
            Node::Conditional { condition,
                                then_branch,
                                else_branch,
                                line, } => {
                self.eval_conditional(condition, then_branch, else_branch.as_deref(), *line)
            },
            Node::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
            Node::Function(_) => Ok(Some(Value::Node(Rc::new(node.clone())))),
        }
    }

    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// Operands, guards and right-hand sides all need a value; this reports a
    /// `MissingValue` error when the node yields nothing.
    ///
    /// # Example
    /// ```
    /// use sapphire::{
    ///     ast::Node,
    ///     interpreter::{evaluator::core::Scope, value::core::Value},
    /// };
    ///
    /// let mut scope = Scope::new();
    /// let v = scope.eval_child(&Node::atom(10, 1), 1).unwrap();
    /// assert_eq!(v, Value::Integer(10));
    ///
    /// let empty = Node::Block { lines: vec![], line: 1 };
    /// assert!(scope.eval_child(&empty, 1).is_err());
    /// ```
    ///
    /// # Errors
    /// Propagates evaluation errors and returns `MissingValue` for `None`.
    pub fn eval_child(&mut self, node: &Node, line: usize) -> EvalResult<Value> {
        self.eval(node)?.ok_or(RuntimeError::MissingValue { line })
    }
}
