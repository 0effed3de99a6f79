mod blood_group;
mod donor;

pub use blood_group::BloodGroup;
pub use donor::{Donor, NewDonor};
