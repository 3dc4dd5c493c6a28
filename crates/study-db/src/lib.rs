//! # study-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `study-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers (including the meeting schedule columns)
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use study_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use study_db::repositories::PgGroupRepository;
//! use study_core::traits::GroupRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let group_repo = PgGroupRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgGroupRepository, PgJoinRequestRepository, PgMeetingRepository, PgMembershipRepository,
    PgNotificationRepository, PgUserRepository,
};
