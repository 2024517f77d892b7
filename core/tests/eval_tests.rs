use varlisp::*;

fn eval_str(input: &str) -> Variant {
    let expr = parse(input).unwrap_or_else(|e| panic!("{input:?} failed to parse: {e}"));
    let mut scope = Scope::new(None);
    expr.eval(&mut scope).take_evaluated_value()
}

fn assert_failure(input: &str, message: &str) {
    match eval_str(input) {
        Variant::Error(err) => assert_eq!(err.to_string(), message, "input {input:?}"),
        other => panic!("{input:?}: expected an error, got {other:?}"),
    }
}

// ============================================================================
// Atoms
// ============================================================================

#[test]
fn test_empty_input_is_null() {
    assert_eq!(eval_str(""), Variant::Null);
    assert_eq!(eval_str(" "), Variant::Null);
    assert_eq!(eval_str("()"), Variant::Null);
}

#[test]
fn test_literal_atoms() {
    assert_eq!(eval_str("1"), Variant::Int(1));
    assert_eq!(eval_str("\"Now is the time\""), Variant::from("Now is the time"));
    assert_eq!(eval_str("False"), Variant::Bool(false));
    assert_eq!(eval_str("11/11/1974").to_string(), "1974-11-11T00:00:00Z");
}

#[test]
fn test_unbound_atom() {
    assert_failure("a", "scope error: unresolved identifier \"a\"");
}

// ============================================================================
// Builtin Calls
// ============================================================================

#[test]
fn test_arithmetic() {
    assert_eq!(eval_str("(+ 1 2)"), Variant::Int(3));
    assert_eq!(eval_str("(+ 1 2.0)"), Variant::Float(3.0));
    assert_eq!(eval_str("(- 10)"), Variant::Int(-10));
    assert_eq!(eval_str("(- 10 (* 2 3))"), Variant::Int(4));
    assert_eq!(eval_str("(/ 1 4)"), Variant::Float(0.25));
    assert_eq!(eval_str("(^ 2 3)"), Variant::Float(8.0));
    assert_eq!(eval_str("(mul 1.5 2)"), Variant::Float(3.0));
}

#[test]
fn test_logical() {
    let cases = [
        ("(or false 0)", false),
        ("(or 1 t)", true),
        ("(nor false 0)", true),
        ("(and true t)", true),
        ("(nand true t)", false),
        ("(xor true false)", true),
        ("(xnor f 0)", true),
        ("(&& 1 t T TRUE true True)", true),
        ("(|| 0 f F FALSE false False)", false),
        ("(! false)", true),
        ("(or 1 t T TRUE true True)", true),
        ("(nand 0 f F FALSE false False)", true),
        ("(or (or 1 t) (or T TRUE (or true True)))", true),
    ];

    for (input, expected) in cases {
        assert_eq!(eval_str(input), Variant::Bool(expected), "input {input:?}");
    }
}

#[test]
fn test_strings() {
    assert_eq!(
        eval_str("(concat \"Hello, \" \"World!\")"),
        Variant::from("Hello, World!")
    );
    assert_eq!(eval_str("(++ \"n=\" 27)"), Variant::from("n=27"));
    assert_eq!(
        eval_str("(++ \"pi is about \" 3.14)"),
        Variant::from("pi is about 3.140000e+00")
    );
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_unacceptable_type() {
    assert_failure(
        "(or 3.1415 today)",
        "type error: argument of unacceptable type \"Float\" passed to \"or\"",
    );
}

#[test]
fn test_unresolved_identifier() {
    assert_failure(
        "(or yesterday today)",
        "scope error: unresolved identifier \"yesterday\"",
    );
    assert_failure("(+ 1 2 a)", "scope error: unresolved identifier \"a\"");
}

#[test]
fn test_invalid_function() {
    assert_failure("(+ (1) (2))", "scope error: requested function \"1\" not found");
    assert_failure("(nope 1)", "scope error: requested function \"nope\" not found");
}

#[test]
fn test_arity_and_math_errors() {
    assert_failure(
        "(sub 1 2 3)",
        "arity error: expected exactly 1 or 2 arguments for \"sub\"",
    );
    assert_failure(
        "(xor t f t)",
        "arity error: expected exactly 2 arguments for \"xor\"",
    );
    assert_failure("(/ 1 0)", "math error: attempt to divide by zero");
}

#[test]
fn test_errors_propagate_through_nesting() {
    assert_eq!(
        eval_str("(+ 1 (/ 2 0) \"x\")"),
        Variant::Error(EvalError::DivideByZero)
    );
}

// ============================================================================
// Scopes
// ============================================================================

#[test]
fn test_binding_resolves_identifier() {
    let expr = parse("(+ 1 2 a)").unwrap();

    let mut scope = Scope::new(None);
    assert!(expr.eval(&mut scope).evaluated_value().is_error());

    scope.bind("a", 4_i64);
    assert_eq!(expr.eval(&mut scope).evaluated_value(), &Variant::Int(7));
}

#[test]
fn test_nested_lists_see_parent_bindings() {
    let mut root = Scope::new(None);
    root.bind("x", 2.5);
    root.bind("greeting", "hi ");

    let expr = parse("(concat greeting (* x (+ x 1)))").unwrap();
    assert_eq!(expr.evaluate(&root), Variant::from("hi 8.750000e+00"));
}

#[test]
fn test_child_scope_shadows() {
    let mut root = Scope::new(None);
    root.bind("n", 1_i64);

    let mut child = Scope::new(Some(&root));
    child.bind("n", 10_i64);

    let expr = parse("(+ n 1)").unwrap();
    assert_eq!(expr.evaluate(&root), Variant::Int(2));
    assert_eq!(expr.evaluate(&child), Variant::Int(11));
}

#[test]
fn test_shadowing_a_builtin_name() {
    let mut scope = Scope::new(None);
    scope.bind("concat", 5_i64);

    let expr = parse("(concat 1)").unwrap();
    assert_eq!(
        expr.evaluate(&scope),
        Variant::Error(EvalError::FunctionNameNotFound("concat".to_string()))
    );
}

#[test]
fn test_repeated_evaluation_is_stable() {
    let expr = parse("(+ 1 (* 2 3) (- 4))").unwrap();
    let first = expr.evaluate(&Scope::new(None));
    let second = expr.evaluate(&Scope::new(None));
    assert_eq!(first, Variant::Int(3));
    assert_eq!(first, second);
}
