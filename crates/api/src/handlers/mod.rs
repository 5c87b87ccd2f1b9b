//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Simple reads delegate straight to a repository in `spriggly_db`;
//! reward-mutating operations go through the engine in [`crate::engine`].

pub mod auth;
pub mod daily;
pub mod focus;
pub mod notification;
pub mod plants;
pub mod shop;
pub mod tasks;
pub mod users;
