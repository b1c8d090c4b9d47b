//! Domain Store State
//!
//! One `DomainStore` backs one conversation. It owns the doctors, the booked
//! appointments and the pharmacy catalog; handlers borrow it mutably for the
//! duration of a single command.

use super::helpers::same_name;
use super::models::{Appointment, Doctor, PharmacyItem};
use crate::knowledge;

#[derive(Debug, Clone, Default)]
pub struct DomainStore {
    /// Doctors in listing order
    pub doctors: Vec<Doctor>,

    /// Appointments in booking order
    pub appointments: Vec<Appointment>,

    /// Pharmacy shelf in listing order
    pub catalog: Vec<PharmacyItem>,
}

impl DomainStore {
    /// Creates a store populated from the seed tables
    pub fn seeded() -> Self {
        Self {
            doctors: knowledge::seed_doctors(),
            appointments: Vec::new(),
            catalog: knowledge::seed_catalog(),
        }
    }

    /// Resolves a doctor reference: an id (case-insensitive) or a 1-based
    /// position in the listing.
    pub fn find_doctor(&self, reference: &str) -> Option<&Doctor> {
        let index = self.doctor_position(reference)?;
        self.doctors.get(index)
    }

    pub fn find_doctor_mut(&mut self, reference: &str) -> Option<&mut Doctor> {
        let index = self.doctor_position(reference)?;
        self.doctors.get_mut(index)
    }

    fn doctor_position(&self, reference: &str) -> Option<usize> {
        if let Some(i) = self.doctors.iter().position(|d| same_name(&d.id, reference)) {
            return Some(i);
        }
        match reference.parse::<usize>() {
            Ok(n) if (1..=self.doctors.len()).contains(&n) => Some(n - 1),
            _ => None,
        }
    }

    /// First doctor whose specialty matches, ignoring case
    pub fn doctor_by_specialty(&self, specialty: &str) -> Option<&Doctor> {
        self.doctors
            .iter()
            .find(|d| same_name(&d.specialty, specialty))
    }

    pub fn find_medicine_mut(&mut self, name: &str) -> Option<&mut PharmacyItem> {
        self.catalog.iter_mut().find(|m| same_name(&m.name, name))
    }

    pub fn book(&mut self, appointment: Appointment) {
        self.appointments.push(appointment);
    }

    /// Appointments belonging to one user, in booking order
    pub fn appointments_for<'a>(
        &'a self,
        user_id: &'a str,
    ) -> impl Iterator<Item = &'a Appointment> + 'a {
        self.appointments.iter().filter(move |a| a.user_id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_resolves_by_id_or_position() {
        let store = DomainStore::seeded();
        assert_eq!(store.find_doctor("d2").map(|d| d.name.as_str()), Some("Dr. Life"));
        assert_eq!(store.find_doctor("3").map(|d| d.name.as_str()), Some("Dr. Bold"));
        assert!(store.find_doctor("0").is_none());
        assert!(store.find_doctor("6").is_none());
        assert!(store.find_doctor("D9").is_none());
    }

    #[test]
    fn appointments_are_filtered_by_user() {
        let mut store = DomainStore::seeded();
        for (user, slot) in [("u1", "9AM"), ("u2", "10AM"), ("u1", "2PM")] {
            store.book(Appointment {
                user_id: user.into(),
                user_name: user.into(),
                doctor_id: "D1".into(),
                doctor_name: "Dr. Smith".into(),
                slot: slot.into(),
            });
        }
        let slots: Vec<_> = store.appointments_for("u1").map(|a| a.slot.as_str()).collect();
        assert_eq!(slots, ["9AM", "2PM"]);
    }

    #[test]
    fn medicine_lookup_ignores_case() {
        let mut store = DomainStore::seeded();
        let item = store.find_medicine_mut("cough syrup").expect("seeded");
        assert_eq!(item.name, "Cough Syrup");
        assert_eq!(item.price, 8);
    }
}
