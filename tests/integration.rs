//! End-to-end tests driving the full tokenize -> parse -> read -> eval
//! pipeline the way a program file would.

use pretty_assertions::assert_eq;

use lispy::eval::eval;
use lispy::global_env;
use lispy::parse::parse;
use lispy::value::{read, Value};

fn run(env: &lispy::env::Env, src: &str) -> Value {
    eval(env, read(&parse(src)))
}

#[test]
fn arithmetic_respects_precedence_free_prefix_form() {
    let env = global_env();
    let result = run(&env, "(+ 1 (* 2 3) (- 10 4))");
    assert!(matches!(result, Value::Integer(13)));
}

#[test]
fn closures_capture_their_defining_scope() {
    let env = global_env();
    run(&env, "(fun {make-adder n} {lambda {x} {+ x n}})");
    run(&env, "(def {add5} (make-adder 5))");
    let result = run(&env, "(add5 10)");
    assert!(matches!(result, Value::Integer(15)));
}

#[test]
fn partial_application_returns_a_callable_function() {
    let env = global_env();
    run(&env, "(fun {add3 a b c} {+ a b c})");
    run(&env, "(def {add-to-10} (add3 10))");
    let result = run(&env, "(add-to-10 5 2)");
    assert!(matches!(result, Value::Integer(17)));
}

#[test]
fn recursive_function_computes_factorial() {
    let env = global_env();
    run(
        &env,
        "(fun {fact n} {if (<= n 1) {1} {* n (fact (- n 1))}})",
    );
    let result = run(&env, "(fact 6)");
    assert!(matches!(result, Value::Integer(720)));
}

#[test]
fn repeated_recursive_calls_do_not_corrupt_the_closure_environment() {
    let env = global_env();
    run(
        &env,
        "(fun {fact n} {if (<= n 1) {1} {* n (fact (- n 1))}})",
    );
    assert!(matches!(run(&env, "(fact 5)"), Value::Integer(120)));
    assert!(matches!(run(&env, "(fact 6)"), Value::Integer(720)));
    assert!(matches!(run(&env, "(fact 5)"), Value::Integer(120)));
}

#[test]
fn variadic_formal_collects_remaining_args_as_qexpr() {
    let env = global_env();
    run(&env, "(fun {my-list & items} {items})");
    let result = run(&env, "(my-list 1 2 3)");
    match result {
        Value::QExpr(children) => assert_eq!(children.len(), 3),
        other => panic!("expected QExpr, got {other}"),
    }
}

#[test]
fn division_by_zero_propagates_as_error_value_not_a_panic() {
    let env = global_env();
    let result = run(&env, "(/ 10 0)");
    assert!(result.is_error());
    assert_eq!(result.to_string(), "Error: Division By Zero!");
}

#[test]
fn error_value_short_circuits_enclosing_expression() {
    let env = global_env();
    let result = run(&env, "(+ 1 (/ 1 0) (head {}))");
    assert!(result.is_error());
}

#[test]
fn unterminated_expression_is_a_parse_error() {
    let env = global_env();
    let result = run(&env, "(+ 1 2");
    assert!(result.is_error());
}

#[test]
fn extra_closing_paren_is_a_parse_error() {
    let env = global_env();
    let result = run(&env, "(+ 1 2))");
    assert!(result.is_error());
}

#[test]
fn list_builtins_compose() {
    let env = global_env();
    let result = run(&env, "(eval (join (list +) (list 3 4)))");
    assert!(matches!(result, Value::Integer(7)));
}

#[test]
fn comparison_operators_use_mathematically_correct_orientation() {
    let env = global_env();
    assert!(matches!(run(&env, "(< 1 2)"), Value::Integer(1)));
    assert!(matches!(run(&env, "(> 1 2)"), Value::Integer(0)));
}

#[test]
fn user_defined_functions_compare_structurally_not_by_identity() {
    let env = global_env();
    run(&env, "(fun {square x} {* x x})");
    run(&env, "(fun {square2 x} {* x x})");
    assert!(matches!(run(&env, "(== square square)"), Value::Integer(1)));
    assert!(matches!(run(&env, "(== square square2)"), Value::Integer(1)));
    run(&env, "(fun {cube x} {* x (* x x)})");
    assert!(matches!(run(&env, "(== square cube)"), Value::Integer(0)));
}

#[test]
fn builtins_compare_by_identity_not_structurally() {
    let env = global_env();
    assert!(matches!(run(&env, "(== + +)"), Value::Integer(1)));
    assert!(matches!(run(&env, "(== + -)"), Value::Integer(0)));
}

#[test]
fn display_renders_lists_with_braces() {
    let env = global_env();
    let result = run(&env, "(list 1 2 3)");
    assert_eq!(result.to_string(), "{1 2 3}");
}
