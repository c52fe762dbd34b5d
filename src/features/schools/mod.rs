//! School directory feature.
//!
//! Stores schools with their coordinates and lists them ranked by great-circle
//! distance from a caller-supplied location.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/addSchool` | No | Add a school |
//! | GET | `/api/listSchools?latitude=&longitude=` | No | List schools, nearest first |
//! | GET | `/api/schools/{id}` | No | Get a school by id |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::PgSchoolRepository;
pub use services::SchoolService;
