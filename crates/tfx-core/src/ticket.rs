#![forbid(unsafe_code)]

//! Ticket state as the engine sees it.

use serde::{Deserialize, Serialize};

/// Read-only view of one ticket.
///
/// `is_preview` marks a synthetic ticket built only to show what a real one
/// would look like; it never reaches validation or persistence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketState {
    /// `None` when the validation workflow has not reported yet.
    pub is_validated: Option<bool>,
    pub is_golden_ticket: bool,
    pub is_double_golden: bool,
    /// Effect chosen once at validation time. Kept as raw text: values the
    /// engine does not know are passed through untouched.
    pub saved_special_effect: Option<String>,
    pub is_preview: bool,
    /// Listed on the resale market.
    pub resale_listed: bool,
    /// Carries minted NFT media.
    pub nft_media: bool,
}

impl TicketState {
    /// A synthetic preview ticket.
    #[must_use]
    pub fn preview() -> Self {
        Self {
            is_preview: true,
            ..Self::default()
        }
    }

    /// A real ticket that passed validation.
    #[must_use]
    pub fn validated() -> Self {
        Self {
            is_validated: Some(true),
            ..Self::default()
        }
    }

    /// Validation state with "not reported" read as not validated.
    #[inline]
    #[must_use]
    pub fn validated_flag(&self) -> bool {
        self.is_validated.unwrap_or(false)
    }

    /// Saved effect text, with empty or whitespace-only strings treated as
    /// unset. Anything else comes back untouched.
    #[must_use]
    pub fn saved_effect(&self) -> Option<&str> {
        self.saved_special_effect
            .as_deref()
            .filter(|saved| !saved.trim().is_empty())
    }

    #[must_use]
    pub fn with_saved_effect(mut self, effect: impl Into<String>) -> Self {
        self.saved_special_effect = Some(effect.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert!(TicketState::preview().is_preview);
        assert!(!TicketState::preview().validated_flag());
        assert!(TicketState::validated().validated_flag());
        assert!(!TicketState::validated().is_preview);
    }

    #[test]
    fn null_validation_reads_as_false() {
        let ticket = TicketState::default();
        assert_eq!(ticket.is_validated, None);
        assert!(!ticket.validated_flag());
    }

    #[test]
    fn blank_saved_effect_is_unset() {
        let ticket = TicketState::validated().with_saved_effect("");
        assert_eq!(ticket.saved_effect(), None);
        let ticket = TicketState::validated().with_saved_effect(" \t ");
        assert_eq!(ticket.saved_effect(), None);
        let ticket = TicketState::validated().with_saved_effect(" aurora ");
        assert_eq!(ticket.saved_effect(), Some(" aurora "));
        let ticket = TicketState::validated().with_saved_effect("aurora");
        assert_eq!(ticket.saved_effect(), Some("aurora"));
    }

    #[test]
    fn deserializes_host_record() {
        let json = r#"{"isValidated": null, "isDoubleGolden": true, "savedSpecialEffect": "spooky"}"#;
        let ticket: TicketState = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.is_validated, None);
        assert!(ticket.is_double_golden);
        assert_eq!(ticket.saved_effect(), Some("spooky"));
        assert!(!ticket.resale_listed);
    }
}
