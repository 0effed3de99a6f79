//! Blood donor directory feature.
//!
//! Donors register once and are then searched by blood group, location and
//! donation recency. Every donor leaving the read path carries a masked phone
//! number (see [`masking`]).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/donors` | Search donors (all filters optional) |
//! | GET | `/api/donors/{id}` | Get a donor by id |
//! | POST | `/api/donors` | Register a donor |
//! | PATCH | `/api/donors/{id}/availability` | Update a donor's availability |

pub mod dtos;
pub mod handlers;
pub mod masking;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgDonorRepository;
pub use services::DonorService;
