//! The user-supplied portfolio value and the prompt that collects it.
//!
//! Entry follows a small state machine: `Prompting -> Validating ->
//! Accepted`, with a rejected entry returning to `Prompting` exactly once.
//! A second rejected entry is fatal.

use std::fmt;

use super::error::EqWeightError;

/// Entries the user gets before an invalid value aborts the run.
pub const MAX_ATTEMPTS: u8 = 2;

/// Total amount to spread across all positions. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PortfolioValue(f64);

impl PortfolioValue {
    pub fn new(value: f64) -> Result<Self, EqWeightError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(EqWeightError::InvalidPortfolioValue {
                input: value.to_string(),
                reason: "must be a positive number".into(),
            });
        }
        Ok(Self(value))
    }

    /// Parses a typed entry. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, EqWeightError> {
        let trimmed = input.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| EqWeightError::InvalidPortfolioValue {
                input: trimmed.to_string(),
                reason: "not a number".into(),
            })?;
        Self::new(value).map_err(|_| EqWeightError::InvalidPortfolioValue {
            input: trimmed.to_string(),
            reason: "must be a positive number".into(),
        })
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for PortfolioValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryState {
    /// Waiting for entry number `attempt` (1-based).
    Prompting { attempt: u8 },
    Validating { attempt: u8, input: String },
    Accepted(PortfolioValue),
}

impl EntryState {
    pub fn start() -> Self {
        EntryState::Prompting { attempt: 1 }
    }

    /// Hands a line of user input to a `Prompting` state.
    pub fn submit(self, input: String) -> Self {
        match self {
            EntryState::Prompting { attempt } => EntryState::Validating { attempt, input },
            other => other,
        }
    }

    /// Validates a pending entry.
    ///
    /// An invalid first entry goes back to `Prompting`; an invalid final
    /// entry returns the parse error.
    pub fn validate(self) -> Result<Self, EqWeightError> {
        match self {
            EntryState::Validating { attempt, input } => match PortfolioValue::parse(&input) {
                Ok(value) => Ok(EntryState::Accepted(value)),
                Err(e) if attempt >= MAX_ATTEMPTS => Err(e),
                Err(_) => Ok(EntryState::Prompting {
                    attempt: attempt + 1,
                }),
            },
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_number() {
        assert_eq!(PortfolioValue::parse("1000000").unwrap().get(), 1_000_000.0);
    }

    #[test]
    fn parse_trims_whitespace_and_newline() {
        assert_eq!(PortfolioValue::parse("  2500.50\n").unwrap().get(), 2500.5);
    }

    #[test]
    fn parse_rejects_text() {
        let err = PortfolioValue::parse("abc").unwrap_err();
        assert!(
            matches!(err, EqWeightError::InvalidPortfolioValue { input, .. } if input == "abc")
        );
    }

    #[test]
    fn parse_rejects_zero_negative_and_nan() {
        assert!(PortfolioValue::parse("0").is_err());
        assert!(PortfolioValue::parse("-10").is_err());
        assert!(PortfolioValue::parse("NaN").is_err());
        assert!(PortfolioValue::parse("inf").is_err());
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(PortfolioValue::new(1234.5).unwrap().to_string(), "1234.50");
    }

    #[test]
    fn valid_first_entry_is_accepted() {
        let state = EntryState::start().submit("5000".into()).validate().unwrap();
        assert_eq!(
            state,
            EntryState::Accepted(PortfolioValue::new(5000.0).unwrap())
        );
    }

    #[test]
    fn invalid_first_entry_prompts_again() {
        let state = EntryState::start().submit("abc".into()).validate().unwrap();
        assert_eq!(state, EntryState::Prompting { attempt: 2 });

        let state = state.submit("5000".into()).validate().unwrap();
        assert_eq!(
            state,
            EntryState::Accepted(PortfolioValue::new(5000.0).unwrap())
        );
    }

    #[test]
    fn second_invalid_entry_is_fatal() {
        let state = EntryState::start().submit("abc".into()).validate().unwrap();
        let err = state.submit("xyz".into()).validate().unwrap_err();
        assert!(
            matches!(err, EqWeightError::InvalidPortfolioValue { input, .. } if input == "xyz")
        );
    }

    #[test]
    fn submit_ignored_once_accepted() {
        let accepted = EntryState::Accepted(PortfolioValue::new(1.0).unwrap());
        assert_eq!(accepted.clone().submit("2".into()), accepted);
    }
}
