//! UI components.

pub mod galaxy;
