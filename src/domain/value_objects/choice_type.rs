//! # Choice Type
//!
//! How siblings in an assembly slot are reconciled when a new selection
//! is added.
//!
//! Classification itself is produced by an external collaborator (see
//! [`ChoiceClassifier`](crate::application::services::ChoiceClassifier));
//! this module only defines the resulting enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot reconciliation rule for a prospective selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChoiceType {
    /// Exactly one occupant: a new selection replaces all prior slot
    /// occupants.
    Single,
    /// Binary membership per item: siblings are kept, and a full slot makes
    /// room by evicting optional siblings (catalog minimum of zero) until
    /// the new selection fits under the slot maximum.
    Toggle,
    /// Quantity-bearing occupants: siblings shrink toward their own catalog
    /// minimum until the new selection fits under the slot maximum.
    Multiple,
}

impl fmt::Display for ChoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "SINGLE"),
            Self::Toggle => write!(f, "TOGGLE"),
            Self::Multiple => write!(f, "MULTIPLE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(ChoiceType::Single.to_string(), "SINGLE");
        assert_eq!(ChoiceType::Toggle.to_string(), "TOGGLE");
        assert_eq!(ChoiceType::Multiple.to_string(), "MULTIPLE");
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&ChoiceType::Multiple).unwrap_or_default();
        assert_eq!(json, "\"MULTIPLE\"");
        let back: Result<ChoiceType, _> = serde_json::from_str("\"TOGGLE\"");
        assert_eq!(back.ok(), Some(ChoiceType::Toggle));
    }
}
