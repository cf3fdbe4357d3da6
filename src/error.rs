use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankError {
    #[error("invalid target sum {input:?}: {reason}")]
    Parse { input: String, reason: String },
    #[error("target sum must be non-negative, got {0}")]
    Negative(i64),
    #[error("solution ({days}, {first_deposit}, {second_deposit}) sums to {actual}, not {target}")]
    Inexact {
        days: usize,
        first_deposit: u64,
        second_deposit: u64,
        actual: String,
        target: u64,
    },
    #[error("solution at day {days} is not maximal: index {better} also reaches the target")]
    NotMaximal { days: usize, better: usize },
}

pub fn parse_target(input: &str) -> Result<u64, BankError> {
    let n = input.trim().parse::<i64>().map_err(|e| BankError::Parse {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    u64::try_from(n).map_err(|_| BankError::Negative(n))
}
