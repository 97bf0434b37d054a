//! Reusable UI components

mod button;
mod choice;
mod toast;

pub use button::{render_action_button, BUTTON_HEIGHT};
pub use choice::{render_checkbox, render_radio_group};
pub use toast::render_toast;
