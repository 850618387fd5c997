//! Keypad-driven JPY → TWD conversion calculator.
//!
//! # Responsibility
//! - Hold the keypad display and the conversion rate.
//! - Produce the `(jpy, twd)` pair recorded by `add_expense`.
//!
//! # Invariants
//! - The display is never empty; it resets to `0`.
//! - The display holds at most `MAX_DISPLAY_DIGITS` digits, so `jpy()` is
//!   always finite.
//! - The rate is finite and non-negative.

use crate::service::query::{convert, DEFAULT_JPY_TO_TWD_RATE};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Digits accepted on the keypad; the most an `f64` holds exactly.
pub const MAX_DISPLAY_DIGITS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorError {
    InvalidRate(f64),
}

impl Display for CalculatorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRate(rate) => {
                write!(f, "conversion rate must be finite and non-negative, got {rate}")
            }
        }
    }
}

impl Error for CalculatorError {}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    rate: f64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            rate: DEFAULT_JPY_TO_TWD_RATE,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a custom rate.
    pub fn with_rate(rate: f64) -> Result<Self, CalculatorError> {
        let mut calculator = Self::default();
        calculator.set_rate(rate)?;
        Ok(calculator)
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn set_rate(&mut self, rate: f64) -> Result<(), CalculatorError> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(CalculatorError::InvalidRate(rate));
        }
        self.rate = rate;
        Ok(())
    }

    /// Appends a digit; a lone `0` is replaced. Values above 9 and digits
    /// past `MAX_DISPLAY_DIGITS` are ignored.
    pub fn press_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.display == "0" {
            self.display.clear();
        } else if self.digit_count() >= MAX_DISPLAY_DIGITS {
            return;
        }
        self.display.push(ch);
    }

    fn digit_count(&self) -> usize {
        self.display.chars().filter(char::is_ascii_digit).count()
    }

    /// Appends a decimal point unless one is already present.
    pub fn press_dot(&mut self) {
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    pub fn clear(&mut self) {
        self.display = "0".to_string();
    }

    /// Drops the last character, falling back to `0`.
    pub fn backspace(&mut self) {
        self.display.pop();
        if self.display.is_empty() {
            self.display.push('0');
        }
    }

    /// Amount entered, in JPY. A trailing `.` parses as the integer part.
    pub fn jpy(&self) -> f64 {
        self.display
            .trim_end_matches('.')
            .parse::<f64>()
            .unwrap_or(0.0)
    }

    /// Converted amount, in TWD.
    pub fn twd(&self) -> f64 {
        convert(self.jpy(), self.rate)
    }

    /// `(jpy, twd)` pair for recording an expense.
    pub fn entry(&self) -> (f64, f64) {
        (self.jpy(), self.twd())
    }
}

#[cfg(test)]
mod tests {
    use super::{Calculator, CalculatorError, MAX_DISPLAY_DIGITS};

    fn type_digits(calculator: &mut Calculator, digits: &[u8]) {
        for digit in digits {
            calculator.press_digit(*digit);
        }
    }

    #[test]
    fn leading_zero_is_replaced() {
        let mut calculator = Calculator::new();
        type_digits(&mut calculator, &[1, 5, 0, 0]);
        assert_eq!(calculator.display(), "1500");
        assert_eq!(calculator.entry(), (1500.0, 315.0));
    }

    #[test]
    fn second_dot_is_ignored() {
        let mut calculator = Calculator::new();
        calculator.press_digit(2);
        calculator.press_dot();
        calculator.press_digit(5);
        calculator.press_dot();
        assert_eq!(calculator.display(), "2.5");
        assert_eq!(calculator.jpy(), 2.5);
    }

    #[test]
    fn dot_after_reset_keeps_leading_zero() {
        let mut calculator = Calculator::new();
        calculator.press_dot();
        calculator.press_digit(5);
        assert_eq!(calculator.display(), "0.5");
    }

    #[test]
    fn backspace_and_clear_fall_back_to_zero() {
        let mut calculator = Calculator::new();
        type_digits(&mut calculator, &[4, 2]);
        calculator.backspace();
        assert_eq!(calculator.display(), "4");
        calculator.backspace();
        assert_eq!(calculator.display(), "0");

        type_digits(&mut calculator, &[9, 9]);
        calculator.clear();
        assert_eq!(calculator.display(), "0");
        assert_eq!(calculator.twd(), 0.0);
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let mut calculator = Calculator::new();
        calculator.press_digit(12);
        assert_eq!(calculator.display(), "0");
    }

    #[test]
    fn long_entry_stops_at_digit_limit() {
        let mut calculator = Calculator::new();
        type_digits(&mut calculator, &[9; 320]);
        assert_eq!(calculator.display().len(), MAX_DISPLAY_DIGITS);
        let (jpy, twd) = calculator.entry();
        assert!(jpy.is_finite());
        assert!(twd.is_finite());

        calculator.backspace();
        calculator.press_dot();
        calculator.press_digit(5);
        calculator.press_digit(5);
        assert_eq!(calculator.display(), "99999999999999.5");
    }

    #[test]
    fn rate_must_be_finite_and_non_negative() {
        let mut calculator = Calculator::new();
        assert_eq!(
            calculator.set_rate(-0.1),
            Err(CalculatorError::InvalidRate(-0.1))
        );
        assert!(calculator.set_rate(f64::NAN).is_err());
        assert_eq!(calculator.rate(), 0.21);

        let mut custom = Calculator::with_rate(0.2).unwrap();
        type_digits(&mut custom, &[1, 0, 0]);
        assert_eq!(custom.twd(), 20.0);
    }
}
