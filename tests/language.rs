use std::{cell::RefCell, io::Cursor, rc::Rc};

use pretty_assertions::assert_eq;
use sapphire::{
    Error, Scope, Value,
    ast::Node,
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            core::MAX_EVAL_DEPTH,
            function::{core::BUILTIN_FUNCTIONS, print::print_to, prompt::prompt_with},
        },
        lexer::Token,
        parser::core::MAX_NESTING,
    },
    parse, run, tokenize,
};

fn assert_success(src: &str) -> Option<Value> {
    let mut scope = Scope::with_builtins();
    run(src, &mut scope).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn assert_failure(src: &str) -> Error {
    let mut scope = Scope::with_builtins();
    match run(src, &mut scope) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_value(src: &str, expected: impl Into<Value>) {
    assert_eq!(assert_success(src), Some(expected.into()), "evaluating {src:?}");
}

fn tree(src: &str) -> String {
    parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
              .to_string()
}

#[test]
fn integer_arithmetic() {
    for (a, b) in [(3, 4), (-7, 2), (0, 9), (12, -5)] {
        let mut scope = Scope::new();
        scope.define_value("a", a);
        scope.define_value("b", b);

        assert_eq!(run("a + b", &mut scope).unwrap(), Some(Value::Integer(a + b)));
        assert_eq!(run("a - b", &mut scope).unwrap(), Some(Value::Integer(a - b)));
        assert_eq!(run("a * b", &mut scope).unwrap(), Some(Value::Integer(a * b)));
    }

    assert_value("2 ^ 10", 1024);
    assert_value("3 ^ 0", 1);
    assert_value("1 ^ 99999999999", 1);
}

#[test]
fn exponentiation_folds_left() {
    assert_value("2^3^2", 64);
    assert_eq!(tree("2^3^2"), "(^ (^ 2 3) 2)");
}

#[test]
fn operator_precedence() {
    assert_value("2 + 3 * 4", 14);
    assert_value("(2 + 3) * 4", 20);
    assert_value("2 * 3 ^ 2", 18);
    assert_eq!(tree("1 + 2 * 3 - 4"), "(- (+ 1 (* 2 3)) 4)");
}

#[test]
fn sign_applies_to_whole_expression() {
    assert_eq!(tree("-2 + 3"), "(- (+ 2 3))");
    assert_value("-2 + 3", -5);
    assert_value("2 * -3", -6);
}

#[test]
fn division_produces_reals() {
    assert_value("7 / 2", 3.5);
    assert_value("6 / 3", 2.0);
    assert_value("2 ^ 0 - 1", 0);
    assert_value("2 ^ (0 - 1)", 0.5);
}

#[test]
fn arithmetic_failures() {
    assert!(matches!(assert_failure("1 / 0"),
                     Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
    assert!(matches!(assert_failure("0 ^ (0 - 1)"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(assert_failure("9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(assert_failure("2 ^ 64"), Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(assert_failure("'a' - 1"), Error::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn strings() {
    assert_value("'sap' + \"phire\"", "sapphire");
    assert_value("'ab' * 3", "ababab");
    assert_value("+'42'", 42);
    assert_value("+' 7 '", 7);
    assert!(matches!(assert_failure("+'seven'"),
                     Error::Runtime(RuntimeError::InvalidArgument { .. })));
    assert!(matches!(assert_failure("'ab' * (0 - 1)"),
                     Error::Runtime(RuntimeError::InvalidArgument { .. })));
}

#[test]
fn integers_promote_to_nearest_real() {
    assert_value("9007199254740993 / 1", 9_007_199_254_740_992.0);
    assert_value("2 ^ 60 / 2", 576_460_752_303_423_488.0);
    assert_value("9007199254740993 > 1 / 2", true);
    assert_value("9007199254740993 ^ (1 / 1)", 9_007_199_254_740_992.0);
}

#[test]
fn string_repetition_is_bounded() {
    for src in ["'ab' * 9223372036854775807", "'ab' * 4611686018427387904", "2000000000 * 'x'"] {
        assert!(matches!(assert_failure(src), Error::Runtime(RuntimeError::Overflow { line: 1 })),
                "{src}");
    }
    assert_value("'' * 9223372036854775807", "");
}

#[test]
fn comparisons_and_connectives() {
    assert_value("3 > 2", true);
    assert_value("2 >= 3", false);
    assert_value("2 = 2", true);
    assert_value("'abc' < 'abd'", true);
    assert_value("7 / 2 > 3", true);
    assert_value("1 < 2 && 2 < 3", true);
    assert_value("1 > 2 || 2 > 3", false);
    assert_value("1 < 2 $ 2 < 3", false);
    assert_value("~(1 > 2)", true);
    assert_value("'a' = 1", false);
    assert!(matches!(assert_failure("'a' < 1"), Error::Runtime(RuntimeError::TypeError { .. })));
}

#[test]
fn assignment_round_trip() {
    let mut scope = Scope::new();

    run("x :- 5", &mut scope).unwrap();
    assert_eq!(run("x", &mut scope).unwrap(), Some(Value::Integer(5)));

    run("x :- x * 2 + 1", &mut scope).unwrap();
    assert_eq!(run("x", &mut scope).unwrap(), Some(Value::Integer(11)));

    run("greeting :- 'hi'", &mut scope).unwrap();
    assert_eq!(run("greeting", &mut scope).unwrap(), Some(Value::from("hi")));
    assert!(scope.warnings().is_empty());
}

#[test]
fn assignment_returns_unevaluated_right_hand_side() {
    let mut scope = Scope::new();

    let result = run("x :- 2 + 3", &mut scope).unwrap();

    match result {
        Some(Value::Node(node)) => assert_eq!(node.to_string(), "(+ 2 3)"),
        other => panic!("expected a syntax tree, got {other:?}"),
    }
    assert_eq!(run("x", &mut scope).unwrap(), Some(Value::Integer(5)));
}

#[test]
fn assignment_coerces_other_values_to_strings() {
    let mut scope = Scope::new();

    run("half :- 1 / 2", &mut scope).unwrap();
    run("flag :- 3 > 2", &mut scope).unwrap();

    assert_eq!(run("half", &mut scope).unwrap(), Some(Value::from("0.5")));
    assert_eq!(run("flag", &mut scope).unwrap(), Some(Value::from("true")));

    let warnings = scope.take_warnings();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].message.contains("half"));
    assert!(scope.warnings().is_empty());
}

#[test]
fn chained_assignment_stores_text_of_inner_tree() {
    let mut scope = Scope::new();

    run("x :- y :- 5", &mut scope).unwrap();

    assert_eq!(run("y", &mut scope).unwrap(), Some(Value::Integer(5)));
    assert_eq!(run("x", &mut scope).unwrap(), Some(Value::from("5")));
    assert_eq!(scope.warnings().len(), 1);
}

#[test]
fn stored_booleans_become_truthy_text() {
    let mut scope = Scope::new();

    run("c :- 2 > 3", &mut scope).unwrap();

    assert_eq!(run("c", &mut scope).unwrap(), Some(Value::from("false")));
    assert_eq!(run("c => 1 !! 2", &mut scope).unwrap(), Some(Value::Integer(1)));
    assert_eq!(run("2 > 3 => 1 !! 2", &mut scope).unwrap(), Some(Value::Integer(2)));
}

#[test]
fn assignment_without_value_fails() {
    let mut scope = Scope::new();

    let err = run("x :- {{ }}", &mut scope).unwrap_err();

    assert!(matches!(err, Error::Runtime(RuntimeError::MissingValue { .. })));
    assert!(!scope.contains("x"));
}

#[test]
fn conditional_selects_branch() {
    let mut scope = Scope::new();
    run("3 > 2 => v :- 1 !! v :- 2", &mut scope).unwrap();
    assert_eq!(run("v", &mut scope).unwrap(), Some(Value::Integer(1)));

    let mut scope = Scope::new();
    run("2 > 3 => v :- 1 !! v :- 2", &mut scope).unwrap();
    assert_eq!(run("v", &mut scope).unwrap(), Some(Value::Integer(2)));

    let mut scope = Scope::new();
    assert_eq!(run("2 > 3 => v :- 1", &mut scope).unwrap(), None);
    assert!(!scope.contains("v"));
}

#[test]
fn conditional_guard_uses_truthiness() {
    assert_value("'' => 1 !! 2", 2);
    assert_value("5 - 5 => 1 !! 2", 2);
    assert_value("'x' => 1 !! 2", 1);
    assert_eq!(tree("x => 1 !! 2"), "(IF $x 1 2)");
}

#[test]
fn block_binds_all_and_yields_last_tree() {
    let mut scope = Scope::new();

    let result = run("{{ a :- 1. b :- a + 1. c :- 2 + 3. }}", &mut scope).unwrap();

    let Some(Value::Node(node)) = result else {
        panic!("expected a syntax tree");
    };
    assert_eq!(node.to_string(), "(+ 2 3)");
    assert_eq!(run("a", &mut scope).unwrap(), Some(Value::Integer(1)));
    assert_eq!(run("b", &mut scope).unwrap(), Some(Value::Integer(2)));
    assert_eq!(run("c", &mut scope).unwrap(), Some(Value::Integer(5)));
}

#[test]
fn blocks_share_one_flat_scope() {
    let mut scope = Scope::new();

    run("{{ total :- 1. {{ total :- total + 5. }}. }}", &mut scope).unwrap();

    assert_eq!(run("total", &mut scope).unwrap(), Some(Value::Integer(6)));
    assert_eq!(run("{{ }}", &mut scope).unwrap(), None);
}

#[test]
fn builtins_see_only_the_arguments_they_evaluate() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);

    let mut scope = Scope::new();
    scope.define_builtin("first", move |args, scope, line| {
             log.borrow_mut().push(args.len());
             scope.eval_child(&args[0], line).map(Some)
         });

    let result = run("first:{a :- 1; b :- 2; c :- 3}", &mut scope).unwrap();

    assert!(matches!(result, Some(Value::Node(_))));
    assert_eq!(*seen.borrow(), vec![3]);
    assert!(scope.contains("a"));
    assert!(!scope.contains("b"));
    assert!(!scope.contains("c"));
}

#[test]
fn builtins_observe_scope_mutations_in_order() {
    let mut scope = Scope::new();
    scope.define_builtin("both", |args, scope, line| {
             scope.eval_child(&args[0], line)?;
             let after_first = scope.eval_child(&Node::identifier("n", line), line)?;
             let second = scope.eval_child(&args[1], line)?;
             Ok(Some(Value::from(format!("{after_first} {second}"))))
         });

    let result = run("both:{n :- 4; n * 10}", &mut scope).unwrap();

    assert_eq!(result, Some(Value::from("4 40")));
    assert_eq!(run("n", &mut scope).unwrap(), Some(Value::Integer(4)));
}

#[test]
fn builtins_accept_zero_arguments() {
    let mut scope = Scope::new();
    scope.define_builtin("count", |args, _scope, _line| {
             Ok(Some(Value::Integer(i64::try_from(args.len()).unwrap())))
         });

    assert_eq!(run("count:{}", &mut scope).unwrap(), Some(Value::Integer(0)));
    assert_eq!(run("count:{1; 'two'; {{ }}}", &mut scope).unwrap(),
               Some(Value::Integer(3)));
}

#[test]
fn unbound_identifiers_fail() {
    assert!(matches!(assert_failure("y"),
                     Error::Runtime(RuntimeError::UnboundIdentifier { ref name, line: 1 }) if name == "y"));
    assert!(matches!(assert_failure("y + 1"),
                     Error::Runtime(RuntimeError::UnboundIdentifier { .. })));
    assert!(matches!(assert_failure("nothing:{1}"),
                     Error::Runtime(RuntimeError::UnboundIdentifier { .. })));
}

#[test]
fn only_functions_are_callable() {
    let mut scope = Scope::new();
    run("x :- 5", &mut scope).unwrap();

    assert!(matches!(run("x:{1}", &mut scope),
                     Err(Error::Runtime(RuntimeError::NotCallable { .. }))));
    assert!(matches!(assert_failure("print + 1"),
                     Error::Runtime(RuntimeError::NotAValue { .. })));
}

#[test]
fn call_is_tried_before_expression() {
    let ast = parse("f:{1; 2}").unwrap();

    assert!(matches!(ast, Node::Call { ref callee, ref arguments, .. }
                         if callee == "f" && arguments.len() == 2));
    assert_eq!(tree("print:{x :- 1; 2 + 2}"), "(print [x <- 1] (+ 2 2))");
}

#[test]
fn line_alternatives_nest() {
    assert_eq!(tree("x :- {{ y :- 1. }}"), "[x <- [[y <- 1]]]");
    assert_eq!(tree("x :- 1 > 0 => 'yes' !! 'no'"),
               "[x <- (IF (> 1 0) 'yes' 'no')]");
    assert_eq!(tree("(a > b) && c = d || e < f"),
               "(|| (&& (> $a $b) (= $c $d)) (< $e $f))");
    assert_eq!(tree("~(a > b) && c = d"), "(~ (&& (> $a $b) (= $c $d)))");
}

#[test]
fn tokenizer_reports_lexical_errors() {
    assert!(matches!(tokenize("x :- X"), Err(ParseError::UnrecognizedInput { .. })));
    assert!(matches!(tokenize("1 # 2"), Err(ParseError::UnrecognizedInput { .. })));
    assert!(matches!(tokenize("'abc"), Err(ParseError::UnterminatedString { line: 1 })));
    assert!(matches!(tokenize("\n\n99999999999999999999"),
                     Err(ParseError::LiteralTooLarge { line: 3 })));
}

#[test]
fn tokenizer_tracks_lines_and_prefers_long_operators() {
    let tokens = tokenize("{{ x >= 1.\n}}").unwrap();

    assert_eq!(tokens,
               vec![(Token::BlockStart, 1),
                    (Token::Identifier("x".into()), 1),
                    (Token::GreaterEqual, 1),
                    (Token::Integer(1), 1),
                    (Token::Dot, 1),
                    (Token::BlockEnd, 2),
                    (Token::Eof, 2)]);
}

#[test]
fn newlines_only_advance_the_line() {
    let tokens = tokenize("a\n\nb").unwrap();

    assert_eq!(tokens,
               vec![(Token::Identifier("a".into()), 1),
                    (Token::Identifier("b".into()), 3),
                    (Token::Eof, 3)]);
    assert!(tokens.iter().all(|(token, _)| *token != Token::NewLine));
}

#[test]
fn adjacent_call_ends_lex_as_block_end() {
    let tokens: Vec<Token> = tokenize("f:{g:{1}}").unwrap().into_iter().map(|(t, _)| t).collect();

    assert_eq!(tokens,
               vec![Token::Identifier("f".into()),
                    Token::CallStart,
                    Token::Identifier("g".into()),
                    Token::CallStart,
                    Token::Integer(1),
                    Token::BlockEnd,
                    Token::Eof]);
    assert!(parse("f:{g:{1}}").is_err());
    assert_eq!(tree("f:{g:{1} }"), "(f (g 1))");
}

#[test]
fn less_or_equal_compares() {
    assert_value("2 <= 2", true);
    assert_value("3 <= 2", false);
    assert_value("'a' <= 'b'", true);
    assert_value("7 / 2 <= 3", false);
}

#[test]
fn deep_nesting_is_a_parse_error() {
    let err = parse(&("-".repeat(5000) + "1")).unwrap_err();
    assert!(matches!(err, ParseError::TooDeep { limit: MAX_NESTING, line: 1 }), "{err}");

    let parens = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
    assert!(matches!(parse(&parens), Err(ParseError::TooDeep { .. })));
    assert!(matches!(parse(&"{{ ".repeat(5000)), Err(ParseError::TooDeep { .. })));
    assert!(matches!(assert_failure(&("-".repeat(5000) + "1")),
                     Error::Parse(ParseError::TooDeep { .. })));

    assert_value(&("-".repeat(20) + "1"), 1);
    assert_value(&format!("{}1{}", "(".repeat(20), ")".repeat(20)), 1);
}

#[test]
fn unbounded_recursion_is_a_runtime_error() {
    let mut scope = Scope::new();
    scope.define_function("forever", &["n"], parse("forever:{n + 1}").unwrap());

    let err = run("forever:{0}", &mut scope).unwrap_err();

    assert!(matches!(err, Error::Runtime(RuntimeError::RecursionLimit { limit: MAX_EVAL_DEPTH, .. })),
            "{err}");
    assert_eq!(run("1 + 1", &mut scope).unwrap(), Some(Value::Integer(2)));
}

#[test]
fn parse_errors_point_at_furthest_failure() {
    let err = parse("x :- (1 + ").unwrap_err();

    assert_eq!(err.position(), Some(5));
    assert!(matches!(err, ParseError::Expected { ref found, .. } if found == "end of input"));

    let err = parse("{{ x :- 1 }}").unwrap_err();
    assert!(matches!(err, ParseError::Expected { position: 4, .. }), "{err}");

    assert!(matches!(assert_failure("1 2"), Error::Parse(ParseError::Expected { .. })));
}

#[test]
fn function_definitions_run_in_their_own_frame() {
    let mut scope = Scope::new();
    scope.define_function("double", &["n"], parse("n * 2").unwrap());

    assert_eq!(run("double:{21}", &mut scope).unwrap(), Some(Value::Integer(42)));
    assert!(!scope.contains("n"));

    assert!(matches!(run("double:{1; 2}", &mut scope),
                     Err(Error::Runtime(RuntimeError::ArgumentCountMismatch { found: 2, .. }))));
}

#[test]
fn function_definitions_recurse_and_alias() {
    let mut scope = Scope::new();
    let body = parse("n > 1 => {{ r :- fact:{n - 1}. n * r. }} !! 1").unwrap();
    scope.define_function("fact", &["n"], body);

    assert_eq!(run("fact:{5}", &mut scope).unwrap(), Some(Value::Integer(120)));

    run("f :- fact", &mut scope).unwrap();
    assert_eq!(run("f:{4}", &mut scope).unwrap(), Some(Value::Integer(24)));
    assert!(scope.warnings().is_empty());
}

#[test]
fn host_values_are_visible() {
    let mut scope = Scope::new();
    scope.define_value("limit", 10);
    scope.define_value("unit", "cm");

    assert_eq!(run("limit > 3 => unit !! 'none'", &mut scope).unwrap(),
               Some(Value::from("cm")));
}

#[test]
fn print_writes_display_forms() {
    let mut out = Vec::new();
    let mut scope = Scope::new();
    let Node::Call { arguments, .. } = parse("print:{'total'; 6 * 7; 7 / 2; 1 < 2; {{ }}}").unwrap() else {
        panic!("expected a call");
    };

    let result = print_to(&mut out, &arguments, &mut scope, 1).unwrap();

    assert_eq!(result, None);
    assert_eq!(String::from_utf8(out).unwrap(), "total 42 3.5 true none\n");
}

#[test]
fn print_returns_no_value() {
    assert_eq!(assert_success("print:{}"), None);
}

#[test]
fn prompt_coerces_input() {
    let cases = [("int", "12\n", Value::Integer(12)),
                 ("float", "2.5\n", Value::Real(2.5)),
                 ("bool", "TRUE\r\n", Value::Bool(true)),
                 ("str", "hello there\n", Value::from("hello there"))];

    for (kind, input, expected) in cases {
        let mut out = Vec::new();
        let mut scope = Scope::new();
        let args = [Node::atom("> ", 1), Node::atom(kind, 1)];

        let result = prompt_with(&mut Cursor::new(input), &mut out, &args, &mut scope, 1).unwrap();

        assert_eq!(result, Some(expected));
        assert_eq!(out, b"> ");
    }
}

#[test]
fn prompt_defaults_to_string_and_warns_on_unknown_type() {
    let mut scope = Scope::new();

    let v = prompt_with(&mut Cursor::new("12"),
                        &mut Vec::<u8>::new(),
                        &[Node::atom("? ", 1)],
                        &mut scope,
                        1).unwrap();
    assert_eq!(v, Some(Value::from("12")));

    let v = prompt_with(&mut Cursor::new("12\n"),
                        &mut Vec::<u8>::new(),
                        &[Node::atom("? ", 1), Node::atom("list", 1)],
                        &mut scope,
                        1).unwrap();
    assert_eq!(v, Some(Value::from("12")));
    assert_eq!(scope.warnings().len(), 1);
}

#[test]
fn prompt_evaluates_type_after_reading() {
    let mut input = Cursor::new("5\n");
    let mut out = Vec::new();
    let mut scope = Scope::new();
    let args = [Node::atom("n: ", 1), Node::identifier("kind", 1)];

    let err = prompt_with(&mut input, &mut out, &args, &mut scope, 1).unwrap_err();

    assert!(matches!(err, RuntimeError::UnboundIdentifier { .. }));
    assert_eq!(out, b"n: ");
    assert_eq!(input.position(), 2);
}

#[test]
fn prompt_rejects_bad_input_and_arity() {
    let mut scope = Scope::new();
    let err = prompt_with(&mut Cursor::new("abc\n"),
                          &mut Vec::<u8>::new(),
                          &[Node::atom("", 1), Node::atom("int", 1)],
                          &mut scope,
                          1).unwrap_err();
    assert!(matches!(err, RuntimeError::InvalidArgument { .. }));

    let mut out = Vec::<u8>::new();
    let err = prompt_with(&mut Cursor::new("abc\n"), &mut out, &[], &mut scope, 3).unwrap_err();
    assert!(matches!(err, RuntimeError::ArgumentCountMismatch { found: 0, line: 3, .. }));
    assert!(out.is_empty());

    assert!(matches!(assert_failure("prompt:{}"),
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { found: 0, .. })));
    assert!(matches!(assert_failure("prompt:{1; 2; 3}"),
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { found: 3, .. })));
}

#[test]
fn standard_library_is_registered() {
    let scope = Scope::with_builtins();

    assert!(BUILTIN_FUNCTIONS.iter().all(|name| scope.contains(name)));
    assert!(!Scope::new().contains("print"));
}

#[test]
fn assert_builtin() {
    assert_value("assert:{1; 'a'; 2 > 1}", true);
    assert!(matches!(assert_failure("assert:{1; 0}"),
                     Error::Runtime(RuntimeError::AssertionFailed { line: 1 })));
    assert!(matches!(assert_failure("assert:{{{ }}}"),
                     Error::Runtime(RuntimeError::MissingValue { .. })));
}
