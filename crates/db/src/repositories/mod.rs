//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` for reads. Mutations that participate in an engine
//! operation accept `&mut sqlx::Transaction<'_, Postgres>` instead so the
//! whole operation commits or rolls back as one unit.

pub mod focus_session_repo;
pub mod inventory_repo;
pub mod notification_repo;
pub mod plant_repo;
pub mod session_repo;
pub mod task_repo;
pub mod template_repo;
pub mod user_repo;

pub use focus_session_repo::FocusSessionRepo;
pub use inventory_repo::{BoosterInventoryRepo, SeedInventoryRepo};
pub use notification_repo::NotificationRepo;
pub use plant_repo::PlantRepo;
pub use session_repo::SessionRepo;
pub use task_repo::TaskRepo;
pub use template_repo::TemplateRepo;
pub use user_repo::UserRepo;
