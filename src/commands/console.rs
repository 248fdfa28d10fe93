//! Console prompts and input validation
//!
//! Input is read as whitespace-separated tokens, so one line may answer
//! several prompts. Every prompt re-asks until it gets a valid answer.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::debug;

use super::SessionError;
use crate::models::currency::{self, CurrencyCode};
use crate::utils::Table;

pub const RULE: &str = "********************************************";

/// Rejected user input. The message is what the user is shown.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Please enter a valid number.")]
    NotANumber(String),
    #[error("Please enter a number greater than 0.")]
    NotPositive(f64),
    #[error("Please enter either 0 to exit or 1 to continue converting.")]
    NotAChoice(i64),
}

/// Parse an amount to convert: a finite number strictly greater than zero
pub fn parse_amount(token: &str) -> Result<f64, InputError> {
    let amount: f64 = token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))?;

    if !amount.is_finite() {
        return Err(InputError::NotANumber(token.to_string()));
    }
    if amount <= 0.0 {
        return Err(InputError::NotPositive(amount));
    }
    Ok(amount)
}

/// Parse the continue prompt: `1` continues, `0` exits
pub fn parse_choice(token: &str) -> Result<bool, InputError> {
    match token.parse::<i64>() {
        Ok(1) => Ok(true),
        Ok(0) => Ok(false),
        Ok(other) => Err(InputError::NotAChoice(other)),
        Err(_) => Err(InputError::NotANumber(token.to_string())),
    }
}

/// Token-oriented reader over any input, writing prompts to any output
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Print one line
    pub fn say(&mut self, text: impl Display) -> Result<(), SessionError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Next whitespace-separated token, reading more lines as needed
    pub fn next_token(&mut self) -> Result<String, SessionError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SessionError::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Print the currency menu under `prompt`
    pub fn print_currency_menu(&mut self, prompt: &str) -> Result<(), SessionError> {
        let mut table = Table::new(2, " for ");
        for (code, name) in currency::entries() {
            table.add_row(vec![code, name]);
        }

        write!(self.output, "{}\n{}\n{}{}\n", RULE, prompt, table.render(), RULE)?;
        Ok(())
    }

    /// Ask for a catalog currency until one is entered
    pub fn read_currency(&mut self, prompt: &str) -> Result<CurrencyCode, SessionError> {
        loop {
            self.print_currency_menu(prompt)?;
            let token = self.next_token()?;
            match CurrencyCode::parse(&token) {
                Ok(code) => return Ok(code),
                Err(e) => {
                    debug!("Rejected currency input: {}", e);
                    self.say("Invalid currency, please enter a valid one.")?;
                }
            }
        }
    }

    /// Ask for a positive amount of `code` until one is entered
    pub fn read_amount(&mut self, code: &CurrencyCode) -> Result<f64, SessionError> {
        write!(
            self.output,
            "{}\nHow much of {} do you want to convert?\n{}\n",
            RULE, code, RULE
        )?;

        loop {
            let token = self.next_token()?;
            match parse_amount(&token) {
                Ok(amount) => return Ok(amount),
                Err(e) => {
                    debug!("Rejected amount input: {:?}", e);
                    self.say(e)?;
                }
            }
        }
    }

    /// Ask whether to keep converting until 0 or 1 is entered
    pub fn read_continue(&mut self) -> Result<bool, SessionError> {
        self.say("Please, enter 1 to continue converting or 0 to exit")?;

        loop {
            let token = self.next_token()?;
            match parse_choice(&token) {
                Ok(choice) => return Ok(choice),
                Err(e) => self.say(e)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of<R>(console: &Console<R, Vec<u8>>) -> String {
        String::from_utf8(console.output.clone()).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50"), Ok(50.0));
        assert_eq!(parse_amount("0.25"), Ok(0.25));
        assert_eq!(parse_amount("abc"), Err(InputError::NotANumber("abc".to_string())));
        assert_eq!(parse_amount("inf"), Err(InputError::NotANumber("inf".to_string())));
        assert_eq!(parse_amount("0"), Err(InputError::NotPositive(0.0)));
        assert_eq!(parse_amount("-3"), Err(InputError::NotPositive(-3.0)));
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1"), Ok(true));
        assert_eq!(parse_choice("0"), Ok(false));
        assert_eq!(parse_choice("2"), Err(InputError::NotAChoice(2)));
        assert_eq!(parse_choice("yes"), Err(InputError::NotANumber("yes".to_string())));
        assert_eq!(parse_choice("1.0"), Err(InputError::NotANumber("1.0".to_string())));
    }

    #[test]
    fn test_tokens_split_across_lines() {
        let mut console = console("usd 100\n\n  eur\n");

        assert_eq!(console.next_token().unwrap(), "usd");
        assert_eq!(console.next_token().unwrap(), "100");
        assert_eq!(console.next_token().unwrap(), "eur");
        assert!(matches!(console.next_token(), Err(SessionError::InputClosed)));
    }

    #[test]
    fn test_amount_retry_after_non_numeric() {
        let mut console = console("abc\n50\n");
        let usd = CurrencyCode::parse("USD").unwrap();

        assert_eq!(console.read_amount(&usd).unwrap(), 50.0);

        let output = output_of(&console);
        assert!(output.contains("How much of USD do you want to convert?"));
        assert_eq!(output.matches("Please enter a valid number.").count(), 1);
    }

    #[test]
    fn test_amount_rejects_non_positive() {
        let mut console = console("0 -1 12.5");
        let eur = CurrencyCode::parse("EUR").unwrap();

        assert_eq!(console.read_amount(&eur).unwrap(), 12.5);
        assert_eq!(
            output_of(&console).matches("Please enter a number greater than 0.").count(),
            2
        );
    }

    #[test]
    fn test_currency_reprompts_with_menu() {
        let mut console = console("XYZ\ngbp\n");

        let code = console.read_currency("Select the type of currency you want to convert:").unwrap();
        assert_eq!(code.as_str(), "GBP");

        let output = output_of(&console);
        assert_eq!(output.matches("Invalid currency, please enter a valid one.").count(), 1);
        // Menu printed once per attempt
        assert_eq!(output.matches("EUR for Euro").count(), 2);
        assert!(output.contains("USD for US dollars"));
    }

    #[test]
    fn test_currency_loops_until_valid_or_closed() {
        let mut console = console("XYZ ABC\n");
        assert!(matches!(
            console.read_currency("Pick one:"),
            Err(SessionError::InputClosed)
        ));
    }

    #[test]
    fn test_continue_prompt() {
        let mut console = console("5 x 0");
        assert!(!console.read_continue().unwrap());

        let output = output_of(&console);
        assert!(output.contains("Please enter either 0 to exit or 1 to continue converting."));
        assert!(output.contains("Please enter a valid number."));
    }
}
