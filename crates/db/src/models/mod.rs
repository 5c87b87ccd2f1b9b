//! Entity models and DTOs, one module per table (or closely related group).

pub mod focus_session;
pub mod inventory;
pub mod notification;
pub mod plant;
pub mod session;
pub mod task;
pub mod template;
pub mod user;
