//! # Slotbook Core
//!
//! Shared domain logic and types for the Slotbook booking service.
//! This crate is pure: it performs no I/O and holds no global state,
//! so everything here can be tested without a database or a server.

/// Error taxonomy shared across the workspace
pub mod errors;
/// Request/response and entity models
pub mod models;
/// Time-of-day arithmetic and slot timetable generation
pub mod schedule;
