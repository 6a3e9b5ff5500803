//! Listkeeper: task-tracking backend core.
//!
//! This crate implements the todo lifecycle and partial-update engine behind
//! a task-tracking API: creating, reading, merging partial updates into,
//! deleting, and priority-filtering todo records.
//!
//! # Architecture
//!
//! Listkeeper follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! The HTTP boundary is an external collaborator: it validates inbound
//! payloads, invokes [`todo::services::TodoLifecycleService`], and maps the
//! typed errors to transport status codes.

pub mod todo;
