//! Administrative locations (division → zila → upazila) feature.
//!
//! The hierarchy is seeded by migrations and read-only at runtime. It scopes
//! donor registration and donor search geographically.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/divisions` | List all divisions |
//! | GET | `/api/zilas/{divisionId}` | List zilas in a division |
//! | GET | `/api/upazilas/{zilaId}` | List upazilas in a zila |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgLocationRepository;
pub use services::LocationService;
