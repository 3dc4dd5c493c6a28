//! # study-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod events;
pub mod services;

pub use events::EventBus;
pub use services::{
    GroupService, MeetingService, MembershipService, NotificationService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
