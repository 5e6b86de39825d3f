//! Common reusable UI components

pub mod spinner;
pub mod tabs;

pub use spinner::Spinner;
pub use tabs::{TabItem, Tabs};
