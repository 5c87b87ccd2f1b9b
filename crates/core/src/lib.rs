//! Spriggly domain logic.
//!
//! Pure computation only -- no I/O, no database types. The api crate
//! orchestrates these rules against the persistence layer; keeping them here
//! means every reward formula, streak rule, and growth transform is unit
//! testable without a running server.

pub mod error;
pub mod growth;
pub mod rewards;
pub mod streak;
pub mod types;
