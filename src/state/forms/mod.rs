//! Form domain layer
//!
//! The account form's record, its controller, and the focus model the
//! key handler drives.

mod controller;
mod field;
mod focus;
mod form_state;

pub use controller::{FormController, SubmitOutcome, TERMS_REQUIRED_MESSAGE};
pub use field::TextField;
pub use focus::{ActionButton, FormFocus};
pub use form_state::{FormState, Gender};
