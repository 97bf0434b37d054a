//! Account form controller
//!
//! Owns the [`FormState`] record. Every mutation goes through one of the
//! setters below, and the two commands (`reset`, `submit`) read the record
//! in place.

use super::field::TextField;
use super::form_state::{FormState, Gender};
use crate::state::ToastDuration;

/// Message returned when submitting without accepting the terms
pub const TERMS_REQUIRED_MESSAGE: &str = "Please agree to Terms and Conditions";

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Terms were accepted; carries the account summary (never the password)
    Created { summary: String },
    /// Terms were not accepted
    Rejected { message: String },
}

impl SubmitOutcome {
    /// Text to present to the user
    pub fn message(&self) -> &str {
        match self {
            Self::Created { summary } => summary,
            Self::Rejected { message } => message,
        }
    }

    /// How long the notification for this outcome stays up
    pub fn duration(&self) -> ToastDuration {
        match self {
            Self::Created { .. } => ToastDuration::Long,
            Self::Rejected { .. } => ToastDuration::Short,
        }
    }
}

/// Owner of the account form state
#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    /// Read-only view for rendering
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.state.first_name = value.into();
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.state.last_name = value.into();
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.state.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.state.password = value.into();
    }

    pub fn set_gender(&mut self, value: Gender) {
        self.state.gender = value;
    }

    pub fn set_agreed(&mut self, value: bool) {
        self.state.agreed_to_terms = value;
    }

    /// Dispatch to the setter matching `field`
    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        tracing::trace!(field = field.name(), "field updated");
        match field {
            TextField::FirstName => self.set_first_name(value),
            TextField::LastName => self.set_last_name(value),
            TextField::Username => self.set_username(value),
            TextField::Password => self.set_password(value),
        }
    }

    /// Append a character to a text field
    pub fn push_char(&mut self, field: TextField, c: char) {
        let mut value = field.value(&self.state).to_string();
        value.push(c);
        self.set_text(field, value);
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self, field: TextField) {
        let mut value = field.value(&self.state).to_string();
        if value.pop().is_some() {
            self.set_text(field, value);
        }
    }

    /// Put every field back to its initial value
    pub fn reset(&mut self) {
        self.state = FormState::default();
        tracing::debug!("account form reset");
    }

    /// Check the terms flag and build the outcome. Never mutates the form.
    pub fn submit(&self) -> SubmitOutcome {
        let state = &self.state;
        if state.agreed_to_terms {
            tracing::info!(username = %state.username, gender = %state.gender, "account created");
            SubmitOutcome::Created {
                summary: format!(
                    "Account Created:\nName: {} {}\nUsername: {}\nGender: {}",
                    state.first_name, state.last_name, state.username, state.gender
                ),
            }
        } else {
            tracing::info!("submit rejected: terms not accepted");
            SubmitOutcome::Rejected {
                message: TERMS_REQUIRED_MESSAGE.to_string(),
            }
        }
    }
}
