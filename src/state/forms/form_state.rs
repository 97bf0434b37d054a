//! Account form record and its closed value sets

use std::fmt;

/// Gender choice offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// All choices in display order
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current values of every field on the account form.
///
/// Fields are writable only inside the `forms` module, so every change goes
/// through a [`FormController`](super::FormController) setter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub(super) first_name: String,
    pub(super) last_name: String,
    pub(super) username: String,
    pub(super) password: String,
    pub(super) gender: Gender,
    pub(super) agreed_to_terms: bool,
}

impl FormState {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn agreed_to_terms(&self) -> bool {
        self.agreed_to_terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_blank_male_not_agreed() {
        let state = FormState::default();
        assert_eq!(state.first_name, "");
        assert_eq!(state.last_name, "");
        assert_eq!(state.username, "");
        assert_eq!(state.password, "");
        assert_eq!(state.gender, Gender::Male);
        assert!(!state.agreed_to_terms);
    }

    #[test]
    fn test_accessors_read_fields() {
        let state = FormState {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: "ada".to_string(),
            password: "pw".to_string(),
            gender: Gender::Female,
            agreed_to_terms: true,
        };
        assert_eq!(state.first_name(), "Ada");
        assert_eq!(state.last_name(), "Lovelace");
        assert_eq!(state.username(), "ada");
        assert_eq!(state.password(), "pw");
        assert_eq!(state.gender(), Gender::Female);
        assert!(state.agreed_to_terms());
    }

    #[test]
    fn test_gender_all_order() {
        assert_eq!(Gender::ALL, [Gender::Male, Gender::Female]);
        assert_eq!(Gender::ALL[0], Gender::default());
    }

    #[test]
    fn test_gender_toggle_round_trips() {
        assert_eq!(Gender::Male.toggle(), Gender::Female);
        assert_eq!(Gender::Female.toggle(), Gender::Male);
    }

    #[test]
    fn test_gender_display() {
        assert_eq!(Gender::Male.to_string(), "Male");
        assert_eq!(format!("{}", Gender::Female), "Female");
    }
}
