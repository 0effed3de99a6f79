pub mod donors;
pub mod locations;
