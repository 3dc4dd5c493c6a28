//! Domain events

pub mod domain_event;

pub use domain_event::{
    DomainEvent, GroupCreatedEvent, GroupDeletedEvent, JoinRequestedEvent, MeetingEvent,
    MemberRemovedEvent, MembershipEvent, RequestResolvedEvent,
};
