//! Seed data for a fresh [`DomainStore`](crate::store::DomainStore).
//!
//! Every doctor and catalog literal lives here and nowhere else.

use crate::store::models::{Doctor, PharmacyItem};

/// Returns the seed doctors in listing order.
///
/// Starting ratings average 4.7, 4.5, 4.9, 4.6 and 4.8.
pub fn seed_doctors() -> Vec<Doctor> {
    let seed: [(&str, &str, &str, &str, &[u8]); 5] = [
        ("D1", "Dr. Smith", "General", "New York", &[5, 5, 5, 5, 5, 5, 5, 4, 4, 4]),
        ("D2", "Dr. Life", "Cardiology", "San Francisco", &[5, 4]),
        ("D3", "Dr. Bold", "Pediatrics", "Chicago", &[5, 5, 5, 5, 5, 5, 5, 5, 5, 4]),
        ("D4", "Dr. Rose", "Dermatology", "Los Angeles", &[5, 5, 5, 4, 4]),
        ("D5", "Dr. Green", "Neurology", "Boston", &[5, 5, 5, 5, 4]),
    ];
    seed.into_iter()
        .map(|(id, name, specialty, location, ratings)| {
            Doctor::new(id, name, specialty, location).with_ratings(ratings)
        })
        .collect()
}

/// Returns the seed pharmacy catalog in listing order.
pub fn seed_catalog() -> Vec<PharmacyItem> {
    [
        ("Ibuprofen", 10, 20),
        ("Paracetamol", 5, 50),
        ("Cough Syrup", 8, 10),
        ("Aspirin", 7, 30),
    ]
    .into_iter()
    .map(|(name, price, available)| PharmacyItem::new(name, price, available))
    .collect()
}

/// The unfiltered seed doctor list.
pub fn list_doctors() -> Vec<Doctor> {
    seed_doctors()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_ids_are_unique() {
        let doctors = seed_doctors();
        let mut ids: Vec<_> = doctors.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), doctors.len());
    }

    #[test]
    fn seed_ratings_reproduce_listed_averages() {
        let labels: Vec<_> = list_doctors().iter().map(|d| d.rating_label()).collect();
        assert_eq!(labels, ["4.7", "4.5", "4.9", "4.6", "4.8"]);
        assert!(list_doctors()
            .iter()
            .flat_map(|d| d.ratings.iter())
            .all(|r| (1..=5).contains(r)));
    }
}
