//! Reward and progression engine.
//!
//! Every mutating operation follows the same shape: acquire the caller's
//! per-user async lock, open one transaction, lock the user row, compute
//! outcomes with `spriggly_core`, persist through the repositories, commit.
//! Nothing is written outside the transaction, so a failure anywhere rolls
//! the whole operation back.

pub mod boosters;
pub mod daily;
pub mod focus;
pub mod planting;
pub mod shop;
pub mod tasks;
