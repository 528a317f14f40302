//! Line parsing for the interactive front end.
//!
//! One number per line. A negative number closes the round; anything else
//! must be a whole, non-negative number that fits a condition id.

use thiserror::Error;

use crate::routing::{ActiveConditions, ConditionId, Message};

/// Errors for a single input line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PromptError {
    #[error("Please enter a valid number.")]
    NotANumber(String),

    #[error("Condition ids are whole numbers, got {0}.")]
    NotWhole(f64),

    #[error("Condition id {0} is too large.")]
    OutOfRange(f64),
}

/// What a single line contributes to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Condition(ConditionId),
    /// Negative sentinel: the round is complete.
    Done,
}

/// Parse one line of input.
pub fn parse_entry(line: &str) -> Result<Entry, PromptError> {
    let trimmed = line.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| PromptError::NotANumber(trimmed.to_string()))?;

    if value.is_nan() {
        return Err(PromptError::NotANumber(trimmed.to_string()));
    }
    if value < 0.0 {
        return Ok(Entry::Done);
    }
    if value.fract() != 0.0 {
        return Err(PromptError::NotWhole(value));
    }
    if value > f64::from(u32::MAX) {
        return Err(PromptError::OutOfRange(value));
    }

    Ok(Entry::Condition(ConditionId(value as u32)))
}

/// Conditions collected so far in one round.
#[derive(Debug, Default)]
pub struct Round {
    active: ActiveConditions,
}

impl Round {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line. Returns `Ok(true)` once the sentinel is seen.
    pub fn push_line(&mut self, line: &str) -> Result<bool, PromptError> {
        match parse_entry(line)? {
            Entry::Condition(id) => {
                self.active.push(id);
                Ok(false)
            }
            Entry::Done => Ok(true),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn into_active(self) -> ActiveConditions {
        self.active
    }
}

/// Render the chosen message for stdout.
pub fn render_choice(message: &Message, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string(message)
    } else {
        Ok(format!("Chosen message: {}", message.text()))
    }
}
