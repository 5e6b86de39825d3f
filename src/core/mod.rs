//! Page state machines and static content, independent of Leptos and the DOM

mod accordion;
pub mod chart;
#[cfg(feature = "ssr")]
pub mod config;
mod contact;
mod dashboard;
pub mod fixtures;
mod navbar;
mod parallax;
mod pointer;
#[cfg(test)]
mod tests;

pub use accordion::*;
pub use contact::*;
pub use dashboard::*;
pub use fixtures::*;
pub use navbar::*;
pub use parallax::*;
pub use pointer::*;
