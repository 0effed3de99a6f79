mod donor_handler;

pub use donor_handler::*;
