//! Domain-level error type used by the rules, the collections and the turn
//! state machine.
//!
//! Every `Validation` error is a *rejection*: the state machine absorbs it,
//! leaves its state untouched and waits for the next selection. `Invariant`
//! errors mean the engine itself is inconsistent.

use thiserror::Error;

/// Why a selection or a structural operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Card rank is not present on a non-empty table.
    IllegalAttack,
    /// Card cannot beat the targeted attack card.
    IllegalDefense,
    /// Hand index past the end of the hand.
    IndexOutOfRange,
    /// "End move" while defending, or "take table" while attacking.
    SentinelNotAllowed,
    /// No unanswered table slot to defend against.
    NoTarget,
    /// Card token could not be parsed.
    ParseCard,
    /// Hands, deck and trump do not form a valid deal.
    InvalidDeal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input or rule violation; absorbed by the caller.
    #[error("validation error ({0:?}): {1}")]
    Validation(ValidationKind, String),
    /// Broken engine invariant.
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// The rejection kind, if this is a validation error.
    pub fn kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            DomainError::Invariant(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_exposed_for_validation_only() {
        let rejected = DomainError::validation(ValidationKind::IllegalAttack, "rank not on table");
        assert_eq!(rejected.kind(), Some(&ValidationKind::IllegalAttack));

        let broken = DomainError::invariant("trump missing");
        assert_eq!(broken.kind(), None);
        assert_eq!(broken.to_string(), "invariant violated: trump missing");
    }
}
