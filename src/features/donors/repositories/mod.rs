mod donor_query;
mod donor_repository;

pub use donor_query::{DonorFilter, DonorOrdering, DONOR_COLUMNS};
pub use donor_repository::{DonorRepository, PgDonorRepository};
