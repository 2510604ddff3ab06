//! Domain records and response DTOs.

pub mod dashboard;
pub mod task;
pub mod user;
