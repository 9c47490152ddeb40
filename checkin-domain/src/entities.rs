// Domain entities

pub mod attendee;
pub mod checkin;
pub mod event;
pub mod scan;
pub mod settings;

pub use attendee::*;
pub use checkin::*;
pub use event::*;
pub use scan::*;
pub use settings::*;
