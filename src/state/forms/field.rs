//! Text field descriptors

use super::form_state::FormState;

/// The free-text fields of the account form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FirstName,
    LastName,
    Username,
    Password,
}

impl TextField {
    /// All text fields in tab order
    pub const ALL: [TextField; 4] = [
        TextField::FirstName,
        TextField::LastName,
        TextField::Username,
        TextField::Password,
    ];

    /// Machine name, used in log fields
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Username => "username",
            Self::Password => "password",
        }
    }

    /// Label shown in the field border
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Username => "Username",
            Self::Password => "Password",
        }
    }

    /// Whether the value is hidden when rendered
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Password)
    }

    /// Read this field's current value out of the form record
    pub fn value<'a>(&self, state: &'a FormState) -> &'a str {
        match self {
            Self::FirstName => state.first_name(),
            Self::LastName => state.last_name(),
            Self::Username => state.username(),
            Self::Password => state.password(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, state: &FormState, mask: char) -> String {
        let value = self.value(state);
        if self.is_masked() {
            mask.to_string().repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}
