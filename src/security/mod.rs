//! Security subsystem.
//!
//! # Design Decisions
//! - The gate is a pure function over (environment, credential); the
//!   dispatcher owns the 401 short-circuit so the decision stays testable
//!   in isolation
//! - Fail closed: unknown environments enforce the key

pub mod api_key;

pub use api_key::{authorize, Decision};
