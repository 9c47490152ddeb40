pub mod scan_decoder;

pub use scan_decoder::*;
