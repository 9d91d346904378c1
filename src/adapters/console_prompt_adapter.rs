//! Interactive portfolio value prompt.

use std::io::{BufRead, Write};

use log::warn;

use crate::domain::error::EqWeightError;
use crate::domain::portfolio_value::{EntryState, PortfolioValue};
use crate::ports::value_port::PortfolioValuePort;

pub const PROMPT: &str = "Enter the value of your portfolio: ";
pub const RETRY_MESSAGE: &str = "That's not a number! \nPlease try again.";

/// Prompts on `output` and reads answers line by line from `input`.
pub struct ConsolePromptAdapter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePromptAdapter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, EqWeightError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EqWeightError::InvalidPortfolioValue {
                input: String::new(),
                reason: "input closed before a value was entered".into(),
            });
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> PortfolioValuePort for ConsolePromptAdapter<R, W> {
    fn read_portfolio_value(&mut self) -> Result<PortfolioValue, EqWeightError> {
        let mut state = EntryState::start();
        loop {
            state = match state {
                EntryState::Accepted(value) => return Ok(value),
                EntryState::Prompting { attempt } => {
                    if attempt > 1 {
                        writeln!(self.output, "{}", RETRY_MESSAGE)?;
                    }
                    write!(self.output, "{}", PROMPT)?;
                    self.output.flush()?;
                    let line = self.read_line()?;
                    EntryState::Prompting { attempt }.submit(line)
                }
                validating @ EntryState::Validating { .. } => {
                    let next = validating.validate()?;
                    if let EntryState::Prompting { attempt } = next {
                        warn!("rejected portfolio value entry, attempt {} follows", attempt);
                    }
                    next
                }
            };
        }
    }
}
