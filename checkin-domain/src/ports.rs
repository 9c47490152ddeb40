// Gateway Port Traits (Interfaces)
// Define what the client needs from the remote API

pub mod gateways;

pub use gateways::*;
