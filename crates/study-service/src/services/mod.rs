//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod group;
pub mod meeting;
pub mod membership;
pub mod notification;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use group::GroupService;
pub use meeting::MeetingService;
pub use membership::MembershipService;
pub use notification::NotificationService;
