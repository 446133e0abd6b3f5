use crate::{
    CalcError, calculate_with,
    config::Limits,
    interpreter::{evaluator::core::Evaluator, value::Number},
};

/// Characters the keyboard may append to the display.
pub const ALLOWED_INPUT: &str = "0123456789.+-*/()%";

/// A single user action on the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Appends a character to the display.
    Input(char),
    /// Empties the display.
    Clear,
    /// Removes the last character of the display.
    Backspace,
    /// Evaluates the display and replaces it with the result.
    Equals,
    /// Evaluates the display and replaces it with the negated result.
    ToggleSign,
    /// Evaluates the display and replaces it with the result divided by 100.
    Percent,
}

impl Key {
    /// Maps a keypad button label to its key.
    ///
    /// Note that the `%` button means percent, while a typed `%` character
    /// (see [`Key::from_char`]) is the modulo operator.
    ///
    /// # Example
    /// ```
    /// use abacus::Key;
    ///
    /// assert_eq!(Key::from_button("7"), Some(Key::Input('7')));
    /// assert_eq!(Key::from_button("±"), Some(Key::ToggleSign));
    /// assert_eq!(Key::from_button("%"), Some(Key::Percent));
    /// assert_eq!(Key::from_button("sin"), None);
    /// ```
    #[must_use]
    pub fn from_button(label: &str) -> Option<Self> {
        match label {
            "C" => Some(Self::Clear),
            "⌫" => Some(Self::Backspace),
            "=" => Some(Self::Equals),
            "±" => Some(Self::ToggleSign),
            "%" => Some(Self::Percent),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if ALLOWED_INPUT.contains(c) => Some(Self::Input(c)),
                    _ => None,
                }
            },
        }
    }

    /// Maps a typed character to its key.
    ///
    /// Enter evaluates, backspace and delete erase, escape clears, and any
    /// character from [`ALLOWED_INPUT`] is appended. Everything else is
    /// ignored.
    ///
    /// # Example
    /// ```
    /// use abacus::Key;
    ///
    /// assert_eq!(Key::from_char('\n'), Some(Key::Equals));
    /// assert_eq!(Key::from_char('%'), Some(Key::Input('%')));
    /// assert_eq!(Key::from_char('x'), None);
    /// ```
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\n' | '\r' => Some(Self::Equals),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            '\u{1b}' => Some(Self::Clear),
            c if ALLOWED_INPUT.contains(c) => Some(Self::Input(c)),
            _ => None,
        }
    }
}

/// Renders an evaluation outcome as display text.
///
/// Numbers use their canonical form; division by zero renders as
/// `Division by zero` and every other failure as `Error`.
///
/// # Example
/// ```
/// use abacus::{calculate, render};
///
/// assert_eq!(render(&calculate("4 + 5")), "9");
/// assert_eq!(render(&calculate("6 / 3")), "2");
/// assert_eq!(render(&calculate("1 / 0")), "Division by zero");
/// assert_eq!(render(&calculate("1 +")), "Error");
/// ```
#[must_use]
pub fn render(result: &Result<Number, CalcError>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(e) => e.display_text().to_string(),
    }
}

/// The state of a calculator display.
///
/// Every action either edits the text or replaces it wholesale with a
/// rendered result or error text; partial results are never shown.
///
/// # Example
/// ```
/// use abacus::{Calculator, Key};
///
/// let mut calculator = Calculator::new();
/// calculator.type_text("12+5");
/// calculator.press(Key::Percent);
/// assert_eq!(calculator.display(), "0.17");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    display: String,
    limits:  Limits,
}

impl Calculator {
    /// Creates a calculator with an empty display and default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator with an empty display and the given limits.
    #[must_use]
    pub fn with_limits(limits: Limits) -> Self {
        Self { display: String::new(),
               limits }
    }

    /// Returns the current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Replaces the display text, as when the user edits the field
    /// directly. The text is not filtered.
    pub fn set_display(&mut self, text: impl Into<String>) {
        self.display = text.into();
    }

    /// Applies a key.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Input(c) => self.display.push(c),
            Key::Clear => self.display.clear(),
            Key::Backspace => {
                self.display.pop();
            },
            Key::Equals => self.equals(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.percent(),
        }
        tracing::trace!(?key, display = %self.display, "key pressed");
    }

    /// Types each character of `text` through [`Key::from_char`], ignoring
    /// characters that map to no key.
    pub fn type_text(&mut self, text: &str) {
        for key in text.chars().filter_map(Key::from_char) {
            self.press(key);
        }
    }

    /// Evaluates the display. Does nothing if the display is empty.
    pub fn equals(&mut self) {
        self.transform(Ok);
    }

    /// Evaluates the display and negates the result. Does nothing if the
    /// display is empty.
    ///
    /// # Example
    /// ```
    /// use abacus::Calculator;
    ///
    /// let mut calculator = Calculator::new();
    /// calculator.set_display("42");
    /// calculator.toggle_sign();
    /// assert_eq!(calculator.display(), "-42");
    /// calculator.toggle_sign();
    /// assert_eq!(calculator.display(), "42");
    /// ```
    pub fn toggle_sign(&mut self) {
        self.transform(|value| Evaluator::negate(value, 0).map_err(CalcError::from));
    }

    /// Evaluates the display and divides the result by 100. Does nothing if
    /// the display is empty.
    ///
    /// The whole display is evaluated first, so `12+5` becomes `0.17`.
    pub fn percent(&mut self) {
        self.transform(|value| {
            Evaluator::true_div(value, Number::Integer(100), 0).map_err(CalcError::from)
        });
    }

    /// Evaluates the display, applies `then` to the value, and replaces the
    /// display with the rendered outcome.
    fn transform(&mut self, then: impl FnOnce(Number) -> Result<Number, CalcError>) {
        if self.display.is_empty() {
            return;
        }
        let result = calculate_with(&self.display, &self.limits).and_then(then);
        self.display = render(&result);
    }
}

#[cfg(test)]
mod tests {
    use super::{Calculator, Key};

    fn run(keys: &[Key]) -> String {
        let mut calculator = Calculator::new();
        for key in keys {
            calculator.press(*key);
        }
        calculator.display().to_string()
    }

    #[test]
    fn buttons_build_and_evaluate_an_expression() {
        let labels = ["1", "2", "+", "3", "*", "4", "="];
        let keys: Vec<Key> = labels.iter().filter_map(|l| Key::from_button(l)).collect();
        assert_eq!(run(&keys), "24");
    }

    #[test]
    fn equals_on_empty_display_is_a_no_op() {
        assert_eq!(run(&[Key::Equals, Key::ToggleSign, Key::Percent]), "");
    }

    #[test]
    fn backspace_and_clear() {
        assert_eq!(run(&[Key::Input('1'), Key::Input('2'), Key::Backspace]), "1");
        assert_eq!(run(&[Key::Backspace]), "");
        assert_eq!(run(&[Key::Input('1'), Key::Clear]), "");
    }

    #[test]
    fn errors_replace_the_display() {
        assert_eq!(run(&[Key::Input('8'), Key::Input('/'), Key::Input('0'), Key::Equals]),
                   "Division by zero");
        assert_eq!(run(&[Key::Input('8'), Key::Input('*'), Key::Equals]), "Error");
    }

    #[test]
    fn typing_after_an_error_appends_to_it() {
        let mut calculator = Calculator::new();
        calculator.type_text("1+\n");
        assert_eq!(calculator.display(), "Error");
        calculator.type_text("2");
        assert_eq!(calculator.display(), "Error2");
        calculator.type_text("\n");
        assert_eq!(calculator.display(), "Error");
    }

    #[test]
    fn keyboard_ignores_characters_outside_the_allow_list() {
        let mut calculator = Calculator::new();
        calculator.type_text("2a b**c3");
        assert_eq!(calculator.display(), "2**3");
        calculator.type_text("\r");
        assert_eq!(calculator.display(), "8");
        calculator.type_text("\u{1b}");
        assert_eq!(calculator.display(), "");
    }

    #[test]
    fn percent_of_a_plain_number() {
        let mut calculator = Calculator::new();
        calculator.set_display("50");
        calculator.percent();
        assert_eq!(calculator.display(), "0.5");
    }

    #[test]
    fn results_beyond_the_integer_range_are_shown() {
        let mut calculator = Calculator::new();
        calculator.set_display("2**63");
        calculator.equals();
        assert_eq!(calculator.display(), "9223372036854775808");

        calculator.set_display("-9223372036854775807-1");
        calculator.toggle_sign();
        assert_eq!(calculator.display(), "9223372036854775808");
    }

    #[test]
    fn division_by_zero_text_is_the_same_for_every_key() {
        for key in [Key::Equals, Key::ToggleSign, Key::Percent] {
            let mut calculator = Calculator::new();
            calculator.set_display("7%0");
            calculator.press(key);
            assert_eq!(calculator.display(), "Division by zero", "{key:?}");

            calculator.set_display("7%");
            calculator.press(key);
            assert_eq!(calculator.display(), "Error", "{key:?}");
        }
    }

    #[test]
    fn toggle_sign_on_an_error_shows_error() {
        let mut calculator = Calculator::new();
        calculator.set_display("1/0");
        calculator.toggle_sign();
        assert_eq!(calculator.display(), "Division by zero");
    }
}
