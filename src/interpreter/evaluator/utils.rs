use std::rc::Rc;

use crate::{
    ast::{Atom, Node},
    error::{RuntimeError, Warning},
    interpreter::{
        evaluator::core::{Binding, EvalResult, Scope},
        value::core::Value,
    },
};

impl Scope {
    /// Evaluates an atom.
    ///
    /// Literals evaluate to themselves. An identifier is looked up in the
    /// scope and its bound node is evaluated in turn, so `x :- 5` followed by
    /// `x` yields `5`.
    ///
    /// # Parameters
    /// - `atom`: The literal or identifier.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use sapphire::{
    ///     ast::Atom,
    ///     interpreter::{evaluator::core::Scope, value::core::Value},
    /// };
    ///
    /// let mut scope = Scope::new();
    /// scope.define_value("x", 10);
    ///
    /// let v = scope.eval_atom(&Atom::Identifier("x".into()), 1).unwrap();
    /// assert_eq!(v, Value::Integer(10));
    ///
    /// assert!(scope.eval_atom(&Atom::Identifier("y".into()), 1).is_err());
    /// ```
    ///
    /// # Errors
    /// - `UnboundIdentifier` when the name has no binding.
    /// - `NotAValue` when the name is bound to a built-in.
    pub fn eval_atom(&mut self, atom: &Atom, line: usize) -> EvalResult<Value> {
        match atom {
            Atom::Integer(n) => Ok(Value::Integer(*n)),
            Atom::Str(s) => Ok(Value::Str(s.clone())),
            Atom::Identifier(name) => match self.get(name) {
                Some(Binding::Node(node)) => {
                    let node = Rc::clone(node);
                    self.eval_child(&node, line)
                },
                Some(Binding::Builtin(_)) => Err(RuntimeError::NotAValue { name: name.clone(),
                                                                             line }),
                None => Err(RuntimeError::UnboundIdentifier { name: name.clone(),
                                                              line }),
            },
        }
    }

    /// Evaluates an assignment.
    ///
    /// The right-hand side is evaluated and the result is stored under `name`
    /// as a literal atom, overwriting any previous binding. The assignment
    /// itself yields the syntax tree of its right-hand side, so a block ending
    /// in `x :- 2 + 3` evaluates to the tree `(+ 2 3)`, not to `5`.
    ///
    /// Results that have no literal form are stored as their text and a
    /// [`Warning`] is recorded; see [`Scope::store`].
    ///
    /// # Example
    /// ```
    /// use sapphire::{
    ///     ast::Node,
    ///     interpreter::{evaluator::core::Scope, value::core::Value},
    /// };
    ///
    /// let mut scope = Scope::new();
    /// let result = scope.eval_assignment("x", &Node::atom(5, 1), 1).unwrap();
    ///
    /// assert_eq!(result.to_string(), "5");
    /// assert!(scope.contains("x"));
    /// ```
    ///
    /// # Errors
    /// Propagates errors from the right-hand side. A right-hand side with no
    /// value is a `MissingValue` error and leaves the binding untouched.
    pub fn eval_assignment(&mut self, name: &str, value: &Node, line: usize) -> EvalResult<Value> {
        let result = self.eval_child(value, line)?;
        self.store(name, result, line);
        Ok(Value::Node(Rc::new(value.clone())))
    }

    /// Binds an evaluated value to `name`.
    ///
    /// Integers and strings are stored as literal atoms. A function
    /// definition is bound as-is so the name stays callable. Every other
    /// value (reals, booleans, other syntax trees) is stored as the string of
    /// its displayed text, and a warning is recorded. A stored boolean is
    /// therefore the string `"true"` or `"false"`, and both are truthy.
    pub(crate) fn store(&mut self, name: &str, value: Value, line: usize) {
        let node = match value {
            Value::Integer(n) => Node::atom(n, line),
            Value::Str(s) => Node::atom(s, line),
            Value::Node(node) if matches!(*node, Node::Function(_)) => {
                self.bind(name, Binding::Node(node));
                return;
            },
            other => {
                self.warn(Warning { message: format!("value of '{name}' ({}) is stored as the string \"{other}\"",
                                                     other.type_name()),
                                    line });
                Node::atom(other.to_string(), line)
            },
        };
        self.bind(name, Binding::Node(Rc::new(node)));
    }

    /// Evaluates the lines of a block in order.
    ///
    /// # Returns
    /// The result of the last line, or `None` for an empty block.
    ///
    /// # Errors
    /// Stops at and returns the first error.
    pub fn eval_block(&mut self, lines: &[Node]) -> EvalResult<Option<Value>> {
        let mut last = None;
        for line in lines {
            last = self.eval(line)?;
        }
        Ok(last)
    }

    /// Evaluates a conditional.
    ///
    /// Exactly one branch is evaluated depending on the truthiness of the
    /// guard. When the guard is falsy and there is no else branch, the result
    /// is `None`.
    ///
    /// # Errors
    /// `MissingValue` when the guard yields nothing, plus any error from the
    /// guard or the taken branch.
    pub fn eval_conditional(&mut self,
                            condition: &Node,
                            then_branch: &Node,
                            else_branch: Option<&Node>,
                            line: usize)
                            -> EvalResult<Option<Value>> {
        if self.eval_child(condition, line)?.is_truthy() {
            self.eval(then_branch)
        } else if let Some(else_branch) = else_branch {
            self.eval(else_branch)
        } else {
            Ok(None)
        }
    }

    /// Looks up the binding for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Binds `name`, replacing any previous binding.
    pub fn bind(&mut self, name: &str, binding: Binding) {
        self.bindings.insert(name.to_string(), binding);
    }

    /// Binds `name` to a literal, as if it had been assigned.
    ///
    /// # Example
    /// ```
    /// use sapphire::{interpreter::evaluator::core::Scope, run};
    ///
    /// let mut scope = Scope::new();
    /// scope.define_value("greeting", "hello");
    ///
    /// let v = run("greeting + ' world'", &mut scope).unwrap().unwrap();
    /// assert_eq!(v.to_string(), "hello world");
    /// ```
    pub fn define_value(&mut self, name: &str, value: impl Into<Atom>) {
        self.bind(name, Binding::Node(Rc::new(Node::atom(value, 0))));
    }

    /// Binds `name` to a host function.
    ///
    /// The function receives the unevaluated argument nodes, the scope and
    /// the line of the call.
    pub fn define_builtin<F>(&mut self, name: &str, function: F)
        where F: Fn(&[Node], &mut Self, usize) -> EvalResult<Option<Value>> + 'static
    {
        self.bind(name, Binding::Builtin(Rc::new(function)));
    }

    /// Binds `name` to a function definition with the given parameters.
    ///
    /// # Example
    /// ```
    /// use sapphire::{
    ///     interpreter::{evaluator::core::Scope, value::core::Value},
    ///     parse, run,
    /// };
    ///
    /// let mut scope = Scope::new();
    /// scope.define_function("double", &["n"], parse("n * 2").unwrap());
    ///
    /// let v = run("double:{21}", &mut scope).unwrap();
    /// assert_eq!(v, Some(Value::Integer(42)));
    /// ```
    pub fn define_function(&mut self, name: &str, params: &[&str], body: Node) {
        let line = body.line_number();
        let def = crate::ast::FunctionDef { params: params.iter().map(ToString::to_string).collect(),
                                            body: Box::new(body),
                                            line };
        self.bind(name, Binding::Node(Rc::new(Node::Function(def))));
    }

    /// Records a non-fatal warning and logs it.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!(line = warning.line, "{}", warning.message);
        self.warnings.push(warning);
    }

    /// Warnings recorded so far, oldest first.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Removes and returns all recorded warnings.
    pub fn take_warnings(&mut self) -> Vec<Warning> {
        std::mem::take(&mut self.warnings)
    }
}
