pub mod manager;
pub mod memory;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::MemoryStore;
pub use repository::{HealthCheck, PgStore, SkillRepository, UserRepository, UserStatus};
