use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotteryError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("No pick in the ledger originates from standings slot {original_position}")]
    MissingPick { original_position: u8 },

    #[error("Reconciliation invariant violated: {0}")]
    ReconciliationInvariant(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LotteryError {
    /// Whether the caller can fix the problem by correcting its input.
    /// `ReconciliationInvariant` is an internal post-condition failure and
    /// must never be handled as a user error.
    pub fn is_recoverable(&self) -> bool {
        match self {
            LotteryError::Configuration(_) => true,
            LotteryError::MissingPick { .. } => true,
            LotteryError::ReconciliationInvariant(_) => false,
            LotteryError::Serialization(_) => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, LotteryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_violation_is_not_recoverable() {
        let err = LotteryError::ReconciliationInvariant("duplicate pick 4".to_string());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_input_errors_are_recoverable() {
        assert!(LotteryError::Configuration("bad odds".to_string()).is_recoverable());
        assert!(LotteryError::MissingPick { original_position: 7 }.is_recoverable());
    }
}
