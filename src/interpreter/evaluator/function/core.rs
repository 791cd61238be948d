use crate::{
    ast::{FunctionDef, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Binding, EvalResult, Scope},
            function::{builtin, print, prompt},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers in the standard library table.
///
/// A builtin receives the unevaluated argument nodes, the live scope and the
/// line number of the call.
type BuiltinHandler = fn(&[Node], &mut Scope, usize) -> EvalResult<Option<Value>>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Any` accepts every argument count.
/// - `OneOf(slice)` accepts any arity listed in `slice`.
#[derive(Clone, Copy, Debug)]
pub enum Arity {
    /// Any number of arguments.
    Any,
    /// One of the listed counts.
    OneOf(&'static [usize]),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BuiltinDef` (internal metadata), `BUILTIN_TABLE`
/// (static table walked by [`register_builtins`]) and `BUILTIN_FUNCTIONS`
/// (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinHandler,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names registered by [`register_builtins`].
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print"  => { arity: Arity::Any,              func: print::print },
    "prompt" => { arity: Arity::OneOf(&[1, 2]),  func: prompt::prompt },
    "assert" => { arity: Arity::Any,              func: builtin::assert_fn },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Any => true,
            Self::OneOf(counts) => counts.contains(&n),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Any => "any number of".to_string(),
            Self::OneOf(counts) => {
                counts.iter().map(ToString::to_string).collect::<Vec<_>>().join(" or ")
            },
        }
    }
}

/// Ensures that a call to `name` received an acceptable number of arguments.
///
/// # Example
/// ```
/// use sapphire::interpreter::evaluator::function::core::{Arity, check_arity};
///
/// assert!(check_arity("prompt", Arity::OneOf(&[1, 2]), 2, 1).is_ok());
///
/// let err = check_arity("prompt", Arity::OneOf(&[1, 2]), 3, 4).unwrap_err();
/// assert_eq!(err.to_string(),
///            "Error on line 4: 'prompt' expects 1 or 2 argument(s), but 3 were given.");
/// ```
///
/// # Errors
/// `ArgumentCountMismatch` when `found` is not allowed by `arity`.
pub fn check_arity(name: &str, arity: Arity, found: usize, line: usize) -> EvalResult<()> {
    if arity.check(found) {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                  expected: arity.describe(),
                                                  found,
                                                  line })
    }
}

/// Registers the standard library (`print`, `prompt`, `assert`) into
/// `scope`, replacing any existing bindings with the same names.
///
/// Every entry is wrapped so that its argument count is checked before the
/// handler runs.
pub fn register_builtins(scope: &mut Scope) {
    for def in BUILTIN_TABLE {
        scope.define_builtin(def.name, move |args, scope, line| {
                 check_arity(def.name, def.arity, args.len(), line)?;
                 (def.func)(args, scope, line)
             });
    }
}

impl Scope {
    /// Evaluates a call.
    ///
    /// The callee is looked up in the scope:
    /// - a built-in is invoked with the unevaluated argument nodes and this
    ///   scope, so it decides what to evaluate and may modify bindings;
    /// - a bound function definition runs in its own frame (see
    ///   [`Scope::call_function`]);
    /// - anything else is not callable.
    ///
    /// # Example
    /// ```
    /// use sapphire::{
    ///     ast::Node,
    ///     interpreter::{evaluator::core::Scope, value::core::Value},
    /// };
    ///
    /// let mut scope = Scope::new();
    /// scope.define_builtin("count", |args, _scope, _line| Ok(Some(Value::Integer(args.len() as i64))));
    ///
    /// let v = scope.eval_call("count", &[Node::atom(1, 1), Node::atom(2, 1)], 1).unwrap();
    /// assert_eq!(v, Some(Value::Integer(2)));
    /// ```
    ///
    /// # Errors
    /// - `UnboundIdentifier` when the callee has no binding.
    /// - `NotCallable` when it is bound to something other than a function.
    /// - Any error raised by the callee.
    pub fn eval_call(&mut self,
                     callee: &str,
                     arguments: &[Node],
                     line: usize)
                     -> EvalResult<Option<Value>> {
        let binding = self.get(callee)
                          .cloned()
                          .ok_or_else(|| RuntimeError::UnboundIdentifier { name: callee.to_string(),
                                                                           line })?;

        tracing::trace!(callee, arguments = arguments.len(), line, "call");

        match binding {
            Binding::Builtin(function) => function(arguments, self, line),
            Binding::Node(node) => match node.as_ref() {
                Node::Function(def) => self.call_function(callee, def, arguments, line),
                _ => Err(RuntimeError::NotCallable { name: callee.to_string(),
                                                     line }),
            },
        }
    }

    /// Executes a function definition.
    ///
    /// Each argument is evaluated in the caller's scope, in order, and the
    /// result is bound to the matching parameter in a copy of the scope,
    /// following the same storage rule as an assignment. The body is then
    /// evaluated in that frame. Bindings made in the frame are discarded when
    /// the call returns; warnings are passed on to the caller.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` when the argument count differs from the
    ///   parameter count.
    /// - Any error raised while evaluating the arguments or the body.
    pub fn call_function(&mut self,
                         name: &str,
                         def: &FunctionDef,
                         arguments: &[Node],
                         line: usize)
                         -> EvalResult<Option<Value>> {
        if arguments.len() != def.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: def.params.len().to_string(),
                                                             found: arguments.len(),
                                                             line });
        }

        let values = arguments.iter()
                              .map(|argument| self.eval_child(argument, line))
                              .collect::<EvalResult<Vec<_>>>()?;

        let mut frame = Self { bindings: self.bindings.clone(),
                               warnings: Vec::new(),
                               depth:    self.depth, };
        for (param, value) in def.params.iter().zip(values) {
            frame.store(param, value, line);
        }

        let result = frame.eval(&def.body);
        self.warnings.append(&mut frame.warnings);
        result
    }
}

