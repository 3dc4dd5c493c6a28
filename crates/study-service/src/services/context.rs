//! Service context - dependency container for services
//!
//! Holds the repositories, the event bus, and other dependencies needed by
//! services.

use std::sync::Arc;

use study_common::auth::JwtService;
use study_core::traits::{
    GroupRepository, JoinRequestRepository, MeetingRepository, MembershipRepository,
    NotificationRepository, UserRepository,
};
use study_db::PgPool;

use crate::events::EventBus;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The in-process domain event bus
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    group_repo: Arc<dyn GroupRepository>,
    member_repo: Arc<dyn MembershipRepository>,
    request_repo: Arc<dyn JoinRequestRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    meeting_repo: Arc<dyn MeetingRepository>,

    // Events
    event_bus: EventBus,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        group_repo: Arc<dyn GroupRepository>,
        member_repo: Arc<dyn MembershipRepository>,
        request_repo: Arc<dyn JoinRequestRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        meeting_repo: Arc<dyn MeetingRepository>,
        event_bus: EventBus,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            group_repo,
            member_repo,
            request_repo,
            notification_repo,
            meeting_repo,
            event_bus,
            jwt_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the study group repository
    pub fn group_repo(&self) -> &dyn GroupRepository {
        self.group_repo.as_ref()
    }

    /// Get the membership repository
    pub fn member_repo(&self) -> &dyn MembershipRepository {
        self.member_repo.as_ref()
    }

    /// Get the join request repository
    pub fn request_repo(&self) -> &dyn JoinRequestRepository {
        self.request_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    /// Get the meeting repository
    pub fn meeting_repo(&self) -> &dyn MeetingRepository {
        self.meeting_repo.as_ref()
    }

    // === Events ===

    /// Get the domain event bus
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("event_bus", &self.event_bus)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    group_repo: Option<Arc<dyn GroupRepository>>,
    member_repo: Option<Arc<dyn MembershipRepository>>,
    request_repo: Option<Arc<dyn JoinRequestRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    meeting_repo: Option<Arc<dyn MeetingRepository>>,
    event_bus: Option<EventBus>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            group_repo: None,
            member_repo: None,
            request_repo: None,
            notification_repo: None,
            meeting_repo: None,
            event_bus: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn group_repo(mut self, repo: Arc<dyn GroupRepository>) -> Self {
        self.group_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MembershipRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn request_repo(mut self, repo: Arc<dyn JoinRequestRepository>) -> Self {
        self.request_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn meeting_repo(mut self, repo: Arc<dyn MeetingRepository>) -> Self {
        self.meeting_repo = Some(repo);
        self
    }

    pub fn event_bus(mut self, bus: EventBus) -> Self {
        self.event_bus = Some(bus);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.group_repo
                .ok_or_else(|| super::error::ServiceError::validation("group_repo is required"))?,
            self.member_repo
                .ok_or_else(|| super::error::ServiceError::validation("member_repo is required"))?,
            self.request_repo
                .ok_or_else(|| super::error::ServiceError::validation("request_repo is required"))?,
            self.notification_repo.ok_or_else(|| {
                super::error::ServiceError::validation("notification_repo is required")
            })?,
            self.meeting_repo
                .ok_or_else(|| super::error::ServiceError::validation("meeting_repo is required"))?,
            self.event_bus
                .ok_or_else(|| super::error::ServiceError::validation("event_bus is required"))?,
            self.jwt_service
                .ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
