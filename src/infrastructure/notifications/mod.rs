//! Notifier implementations.

mod flash_notifier;

pub use flash_notifier::FlashNotifier;
