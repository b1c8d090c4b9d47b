//! Domain Models
//!
//! This module contains all data structures of the clinic and pharmacy
//! domain.

// =============================================================================
// Doctors & Appointments
// =============================================================================

/// Represents a physician that can be listed, selected, rated and booked
#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    /// Unique identifier (e.g. "D2")
    pub id: String,

    /// Display name
    pub name: String,

    /// Medical specialty
    pub specialty: String,

    /// City of practice
    pub location: String,

    /// Ratings in submission order, each within 1..=5
    pub ratings: Vec<u8>,
}

impl Doctor {
    pub fn new(id: &str, name: &str, specialty: &str, location: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
            location: location.to_string(),
            ratings: Vec::new(),
        }
    }

    pub fn with_ratings(mut self, ratings: &[u8]) -> Self {
        self.ratings = ratings.to_vec();
        self
    }

    /// Arithmetic mean of all ratings, `None` when unrated.
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let sum: u32 = self.ratings.iter().map(|r| u32::from(*r)).sum();
        Some(f64::from(sum) / self.ratings.len() as f64)
    }

    /// Average rendered to one decimal place, or "No ratings".
    pub fn rating_label(&self) -> String {
        match self.average_rating() {
            // Round half away from zero; `{:.1}` alone rounds exact ties to even.
            Some(avg) => format!("{:.1}", (avg * 10.0).round() / 10.0),
            None => "No ratings".to_string(),
        }
    }
}

/// A booked appointment. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub user_id: String,
    pub user_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    /// Free-form slot token exactly as the user typed it
    pub slot: String,
}

// =============================================================================
// Pharmacy & Cart
// =============================================================================

/// A medication on the pharmacy shelf
#[derive(Debug, Clone, PartialEq)]
pub struct PharmacyItem {
    /// Name of the medication
    pub name: String,

    /// Unit price in whole dollars
    pub price: u32,

    /// Units left in stock
    pub available: u32,
}

impl PharmacyItem {
    pub fn new(name: &str, price: u32, available: u32) -> Self {
        Self {
            name: name.to_string(),
            price,
            available,
        }
    }
}

/// Represents an item in the user's cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// Name of the medication
    pub name: String,

    /// Quantity of this item
    pub quantity: u32,

    /// Unit price in whole dollars, when known
    pub unit_price: Option<u32>,
}

impl CartItem {
    /// Price times quantity; unpriced items count as zero.
    pub fn subtotal(&self) -> u32 {
        self.unit_price.unwrap_or(0) * self.quantity
    }
}
