//! Domain Store Module
//!
//! This module contains the in-memory domain state, including:
//! - Domain models (Doctor, Appointment, CartItem, PharmacyItem)
//! - Cart and formatting helpers
//! - The per-conversation store of doctors, appointments and catalog

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{Appointment, CartItem, Doctor, PharmacyItem};
pub use state::DomainStore;
