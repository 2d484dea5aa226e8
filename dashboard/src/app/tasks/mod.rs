//! # Async Tasks
//!
//! Background work spawned by user actions. Each task reports back through
//! the `AppEvent` channel and never touches `DashboardState` directly.

pub mod history;
pub mod send;
pub mod token;
