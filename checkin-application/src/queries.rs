pub mod attendee_queries;
pub mod event_queries;
