//! Outbound delivery of submit outcomes

mod toast;
mod traits;

pub use toast::ToastNotifier;
pub use traits::Notifier;

#[cfg(test)]
pub use traits::MockNotifier;
