pub mod attendee_api;
pub mod event_api;

pub use attendee_api::*;
pub use event_api::*;
