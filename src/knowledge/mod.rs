//! Knowledge Tables
//!
//! Static symptom advice and the seed data every fresh store starts from.

pub mod seed;
pub mod symptoms;

pub use seed::{list_doctors, seed_catalog, seed_doctors};
pub use symptoms::{info_for, match_symptom, NO_INFORMATION, SYMPTOMS};
