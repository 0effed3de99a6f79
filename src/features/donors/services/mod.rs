mod donor_service;

pub use donor_service::DonorService;
