//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `account_form`: The account creation form and its action panel

mod account_form;
mod field_renderer;

pub use account_form::draw as draw_account_form;
