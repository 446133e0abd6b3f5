use abacus::{Calculator, Number, calculate, render};
use proptest::prelude::*;

fn keypad_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r"[0-9.+\-*/()%]{0,40}").unwrap()
}

fn small_integer() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000
}

proptest! {
    #[test]
    fn keypad_input_never_panics(source in keypad_text()) {
        let rendered = render(&calculate(&source));
        prop_assert!(!rendered.is_empty());
    }

    #[test]
    fn arbitrary_text_never_panics(source in "\\PC{0,60}") {
        let _ = calculate(&source);
    }

    #[test]
    fn evaluation_is_deterministic(source in keypad_text()) {
        prop_assert_eq!(render(&calculate(&source)), render(&calculate(&source)));
    }

    #[test]
    fn integer_addition_matches_native(a in small_integer(), b in small_integer()) {
        let source = format!("{a} + ({b})");
        prop_assert_eq!(calculate(&source), Ok(Number::Integer(a + b)));
    }

    #[test]
    fn integer_overflow_yields_a_number(a in any::<i64>(), b in any::<i64>()) {
        for op in ["+", "-", "*"] {
            let source = format!("({a}) {op} ({b})");
            prop_assert!(calculate(&source).is_ok(), "{source}");
        }
    }

    #[test]
    fn floor_division_and_modulo_agree(a in small_integer(), b in small_integer()) {
        prop_assume!(b != 0);
        let quotient = calculate(&format!("({a}) // ({b})"));
        let remainder = calculate(&format!("({a}) % ({b})"));
        match (quotient, remainder) {
            (Ok(Number::Integer(q)), Ok(Number::Integer(r))) => {
                prop_assert_eq!(q * b + r, a);
                prop_assert!(r == 0 || (r < 0) == (b < 0));
            },
            other => prop_assert!(false, "unexpected results {other:?}"),
        }
    }

    #[test]
    fn toggling_sign_twice_restores_integers(n in small_integer()) {
        let mut calculator = Calculator::new();
        calculator.set_display(n.to_string());
        calculator.toggle_sign();
        prop_assert_eq!(calculator.display(), (-n).to_string());
        calculator.toggle_sign();
        prop_assert_eq!(calculator.display(), n.to_string());
    }
}
