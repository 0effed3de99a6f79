mod division;
mod upazila;
mod zila;

pub use division::Division;
pub use upazila::Upazila;
pub use zila::Zila;
