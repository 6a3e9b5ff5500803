//! Application services for todo lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{TodoErrorKind, TodoLifecycleError, TodoLifecycleResult, TodoLifecycleService};
