use std::fs;

use abacus::{
    CalcError, Calculator, Key, Number, calculate, calculate_with,
    config::Limits,
    error::{ParseError, RuntimeError},
    evaluate, evaluate_node, parse, render,
};
use walkdir::WalkDir;

#[test]
fn fixture_cases_hold() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (source, expected) in extract_cases(&content) {
            count += 1;
            let actual = render(&calculate(&source));
            assert_eq!(actual, expected, "case `{source}` in {path:?}");
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .map(|line| {
               let (source, expected) =
                   line.rsplit_once("=>")
                       .unwrap_or_else(|| panic!("Malformed case line: {line}"));
               (source.trim().to_string(), expected.trim().to_string())
           })
           .collect()
}

fn assert_syntax_error(src: &str) {
    match calculate(src) {
        Err(CalcError::Parse(_)) => {},
        other => panic!("`{src}` should be a syntax error, got {other:?}"),
    }
}

fn assert_division_by_zero(src: &str) {
    match calculate(src) {
        Err(e) if e.is_division_by_zero() => {},
        other => panic!("`{src}` should divide by zero, got {other:?}"),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(calculate("2+3*4"), Ok(Number::Integer(14)));
    assert_eq!(calculate("(2+3)*4"), Ok(Number::Integer(20)));
    assert_eq!(calculate("2**3**2"), Ok(Number::Integer(512)));
}

#[test]
fn integers_are_preserved() {
    assert_eq!(calculate("4+5"), Ok(Number::Integer(9)));
    assert_eq!(render(&calculate("4+5")), "9");
    assert_eq!(calculate("1/2"), Ok(Number::Real(0.5)));
    assert_eq!(calculate("4/2"), Ok(Number::Real(2.0)));
}

#[test]
fn division_by_zero_for_every_division_operator() {
    assert_division_by_zero("5/0");
    assert_division_by_zero("5%0");
    assert_division_by_zero("5//0");
    assert_division_by_zero("5.5//0.0");
}

#[test]
fn malformed_input_is_a_syntax_error() {
    assert_syntax_error("2+");
    assert_syntax_error("(2+3");
    assert_syntax_error("2..3");
    assert_syntax_error(")");
    assert_syntax_error("2 2");
}

#[test]
fn malformed_input_reports_the_reason() {
    assert_eq!(parse("2+"), Err(ParseError::UnexpectedEndOfInput));
    assert_eq!(parse("(2+3"), Err(ParseError::ExpectedClosingParen { position: 0 }));
    assert_eq!(parse("2+3)"), Err(ParseError::UnmatchedClosingParen { position: 3 }));
    assert_eq!(parse(""), Err(ParseError::EmptyInput));
    assert_eq!(parse("   "), Err(ParseError::EmptyInput));
}

#[test]
fn non_arithmetic_constructs_are_rejected_by_name() {
    let cases = [("x + 1", "name 'x'"),
                 ("pow(2, 3)", "function call"),
                 ("(1).real", "attribute access '.real'"),
                 ("'a' * 3", "string literal"),
                 ("True", "boolean literal"),
                 ("None", "None literal"),
                 ("1 < 2", "operator '<'"),
                 ("not 0", "unary operator 'not'")];

    for (source, construct) in cases {
        match parse(source) {
            Err(ParseError::Disallowed { construct: found, .. }) => {
                assert_eq!(found, construct, "{source}");
            },
            other => panic!("`{source}` should be disallowed, got {other:?}"),
        }
    }
}

#[test]
fn characters_outside_the_grammar_are_rejected() {
    for source in ["1 $ 2", "1 ; 2", "[1]", "{1}", "1 = 2", "a[0]", "\"unterminated"] {
        assert_syntax_error(source);
    }
}

#[test]
fn evaluator_rejects_unvalidated_trees() {
    let limits = Limits::default();

    let node = abacus::interpreter::parser::core::parse_syntax("2 + x", &limits).unwrap();
    assert!(matches!(evaluate_node(&node, &limits),
                     Err(RuntimeError::UnsupportedNode { position: 4, .. })));

    let node = abacus::interpreter::parser::core::parse_syntax("6 & 3", &limits).unwrap();
    assert_eq!(evaluate_node(&node, &limits),
               Err(RuntimeError::UnsupportedOperator { operator: "&".to_string(),
                                                       position: 2, }));

    let node = abacus::interpreter::parser::core::parse_syntax("-'a'", &limits).unwrap();
    assert!(matches!(evaluate_node(&node, &limits),
                     Err(RuntimeError::UnsupportedNode { .. })));

    let node = abacus::interpreter::parser::core::parse_syntax("~1", &limits).unwrap();
    assert!(matches!(evaluate_node(&node, &limits),
                     Err(RuntimeError::UnsupportedOperator { .. })));
}

#[test]
fn left_operand_fails_first() {
    let limits = Limits::default();
    let node = abacus::interpreter::parser::core::parse_syntax("(1/0) + y", &limits).unwrap();
    assert!(matches!(evaluate_node(&node, &limits),
                     Err(RuntimeError::DivisionByZero { position: 2 })));
}

#[test]
fn negative_base_with_fractional_exponent_is_an_evaluation_error() {
    assert!(matches!(calculate("(-8) ** 0.5"),
                     Err(CalcError::Runtime(RuntimeError::Domain { .. }))));
}

#[test]
fn deep_nesting_fails_without_overflowing_the_stack() {
    let depth = 10_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert!(matches!(calculate(&source),
                     Err(CalcError::Parse(ParseError::NestingTooDeep { .. }))));

    let source = format!("{}1", "-".repeat(depth));
    assert!(matches!(calculate(&source),
                     Err(CalcError::Parse(ParseError::NestingTooDeep { .. }))));

    let source = format!("2{}", "**2".repeat(depth));
    assert!(matches!(calculate(&source),
                     Err(CalcError::Parse(ParseError::NestingTooDeep { .. }))));

    let source = format!("1{}", "+1".repeat(depth));
    assert!(matches!(calculate(&source),
                     Err(CalcError::Parse(ParseError::TooDeep { .. }))));
}

/// Wraps `1` in `levels` groups, appending each chain `repeat` times inside
/// every group: `((1*1+1)*1+1)` for two levels of `["*1", "+1"]`.
fn nested_chains(levels: usize, chains: &[&str], repeat: usize) -> String {
    let tail: String = chains.iter().map(|chain| chain.repeat(repeat)).collect();
    let mut source = "1".to_string();
    for _ in 0..levels {
        source = format!("({source}{tail})");
    }
    source
}

#[test]
fn chains_inside_groups_count_toward_depth() {
    let source = nested_chains(63, &["*1", "+1"], 250);
    assert_eq!(calculate(&source),
               Err(CalcError::Parse(ParseError::TooDeep { limit: 256 })));

    let source = nested_chains(63, &["+1"], 10);
    assert_eq!(calculate(&source),
               Err(CalcError::Parse(ParseError::TooDeep { limit: 256 })));

    let source = nested_chains(60, &["*1", "+1", "-1", "//1", "%2"], 40);
    assert!(matches!(calculate(&source),
                     Err(CalcError::Parse(ParseError::TooDeep { .. }))));
}

#[test]
fn chains_inside_groups_within_limits_evaluate() {
    let source = nested_chains(20, &["+1"], 10);
    assert_eq!(calculate(&source), Ok(Number::Integer(201)));

    let source = nested_chains(5, &["*1", "+1"], 20);
    assert_eq!(calculate(&source), Ok(Number::Integer(101)));
}

#[test]
fn nesting_within_limits_evaluates() {
    let depth = 50;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(calculate(&source), Ok(Number::Integer(1)));

    let source = format!("1{}", "+1".repeat(200));
    assert_eq!(calculate(&source), Ok(Number::Integer(201)));
}

#[test]
fn evaluator_depth_guard_on_unvalidated_trees() {
    use abacus::ast::{Node, UnaryOperator};

    let mut node = Node::number(1, 0);
    for _ in 0..1_000 {
        node = Node::unary(UnaryOperator::Minus, node, 0);
    }
    let limits = Limits { max_depth: 100,
                          ..Limits::default() };
    assert_eq!(evaluate_node(&node, &limits), Err(RuntimeError::TooDeep { limit: 100 }));
}

#[test]
fn custom_limits_apply() {
    let limits = Limits { max_nesting: 3,
                          max_depth:   8, };
    assert!(calculate_with("((1))", &limits).is_ok());
    assert!(calculate_with("((((1))))", &limits).is_err());
    assert!(calculate_with("1+1+1+1+1+1+1+1+1+1", &limits).is_err());
}

#[test]
fn re_evaluation_is_idempotent() {
    for source in ["2**0.5", "7//-2", "1/3", "(-8)**0.5", "1/0", "x"] {
        let expr = parse(source);
        let first = calculate(source);
        let second = calculate(source);
        assert_eq!(first, second, "{source}");
        if let Ok(expr) = expr {
            assert_eq!(evaluate(&expr), evaluate(&expr), "{source}");
        }
    }
}

#[test]
fn sign_toggle_and_percent() {
    let mut calculator = Calculator::new();
    calculator.set_display("42");
    calculator.press(Key::ToggleSign);
    assert_eq!(calculator.display(), "-42");
    calculator.press(Key::ToggleSign);
    assert_eq!(calculator.display(), "42");

    calculator.set_display("50");
    calculator.press(Key::Percent);
    assert_eq!(calculator.display(), "0.5");

    calculator.set_display("100");
    calculator.press(Key::Percent);
    assert_eq!(calculator.display(), "1");

    calculator.set_display("12+5");
    calculator.press(Key::Percent);
    assert_eq!(calculator.display(), "0.17");

    calculator.set_display("3/1");
    calculator.press(Key::ToggleSign);
    assert_eq!(calculator.display(), "-3");
}

#[test]
fn keypad_session() {
    let mut calculator = Calculator::new();
    for label in ["7", "*", "6", "="] {
        calculator.press(Key::from_button(label).unwrap());
    }
    assert_eq!(calculator.display(), "42");

    for label in ["/", "0", "="] {
        calculator.press(Key::from_button(label).unwrap());
    }
    assert_eq!(calculator.display(), "Division by zero");

    calculator.press(Key::from_button("C").unwrap());
    assert_eq!(calculator.display(), "");
}

#[test]
fn example_script_works() {
    let contents = fs::read_to_string("tests/example.calc").expect("missing file");
    let mut calculator = Calculator::new();
    calculator.type_text(&contents);
    assert_eq!(calculator.display(), "2.5");
}
