//! Doctor listing, selection, rating, recommendation and booking.

use super::HandlerResult;
use crate::bot::input::{parse_int, Input};
use crate::error::CommandError;
use crate::store::{Appointment, Doctor, DomainStore};
use crate::user::User;

const SELECT_USAGE: &str =
    "Please provide the number or ID of the doctor you wish to select (e.g., 'select 2' or 'select doctor D2').";
const RATE_USAGE: &str =
    "Please use the format 'rate <doctorId> <1-5>', or 'rate <1-5>' after selecting a doctor.";
const BOOK_USAGE: &str = "Please use the format 'book <doctorId> <time>' (e.g., 'book D3 2PM').";

const DEFAULT_SPECIALTY: &str = "General";

/// Arguments after the command word, minus an optional leading "doctor".
fn doctor_args<'a>(input: &Input<'a>) -> Vec<&'a str> {
    let mut args = input.args();
    if args
        .first()
        .is_some_and(|first| first.eq_ignore_ascii_case("doctor"))
    {
        args.remove(0);
    }
    args
}

fn describe(doctor: &Doctor) -> String {
    format!(
        "{} - {} (Location: {}, Rating: {})",
        doctor.name,
        doctor.specialty,
        doctor.location,
        doctor.rating_label()
    )
}

pub(super) fn list(store: &DomainStore) -> String {
    let mut lines = vec!["Here are the available doctors:".to_string()];
    for (i, d) in store.doctors.iter().enumerate() {
        lines.push(format!(
            "{}. {} - {} (ID: {}, Location: {}, Rating: {})",
            i + 1,
            d.name,
            d.specialty,
            d.id,
            d.location,
            d.rating_label()
        ));
    }
    lines.join("\n")
}

pub(super) fn select(input: &Input, user: &mut User, store: &DomainStore) -> HandlerResult {
    let args = doctor_args(input);
    let reference = args.first().ok_or(CommandError::usage(SELECT_USAGE))?;
    let doctor = store
        .find_doctor(reference)
        .ok_or(CommandError::InvalidSelection)?;

    user.select_doctor(&doctor.id);
    tracing::debug!(user = %user.id, doctor = %doctor.id, "doctor selected");
    Ok(format!("You selected: {}", describe(doctor)))
}

pub(super) fn rate(input: &Input, user: &User, store: &mut DomainStore) -> HandlerResult {
    let args = doctor_args(input);
    let (reference, rating_token) = match args.as_slice() {
        [] => return Err(CommandError::usage(RATE_USAGE)),
        // A lone doctor id is missing its rating.
        [only] if parse_int(only).is_none() && store.find_doctor(only).is_some() => {
            return Err(CommandError::usage(RATE_USAGE))
        }
        [rating] => (
            user.selected_doctor()
                .ok_or(CommandError::NoDoctorSelected)?
                .to_string(),
            *rating,
        ),
        [doctor, rating, ..] => (doctor.to_string(), *rating),
    };

    let doctor = store
        .find_doctor_mut(&reference)
        .ok_or(CommandError::DoctorNotFound)?;
    let rating = parse_int(rating_token)
        .filter(|r| (1..=5).contains(r))
        .ok_or(CommandError::InvalidRating)?;

    doctor.ratings.push(rating as u8);
    tracing::debug!(doctor = %doctor.id, rating, "doctor rated");
    Ok(format!(
        "Thank you! You rated {} {}/5. New average rating: {}.",
        doctor.name,
        rating,
        doctor.rating_label()
    ))
}

pub(super) fn book(input: &Input, user: &User, store: &mut DomainStore) -> HandlerResult {
    let args = doctor_args(input);
    let [reference, slot @ ..] = args.as_slice() else {
        return Err(CommandError::usage(BOOK_USAGE));
    };
    if slot.is_empty() {
        return Err(CommandError::usage(BOOK_USAGE));
    }

    let doctor = store
        .find_doctor(reference)
        .ok_or(CommandError::DoctorNotFound)?;
    let appointment = Appointment {
        user_id: user.id.clone(),
        user_name: user.name.clone(),
        doctor_id: doctor.id.clone(),
        doctor_name: doctor.name.clone(),
        slot: slot.join(" "),
    };
    let reply = format!(
        "Appointment booked with {} at {}.",
        appointment.doctor_name, appointment.slot
    );

    tracing::info!(
        user = %user.id,
        doctor = %appointment.doctor_id,
        slot = %appointment.slot,
        "appointment booked"
    );
    store.book(appointment);
    Ok(reply)
}

pub(super) fn recommend(input: &Input, store: &DomainStore) -> HandlerResult {
    let wanted = store
        .doctors
        .iter()
        .map(|d| d.specialty.as_str())
        .find(|s| input.contains(&s.to_lowercase()))
        .unwrap_or(DEFAULT_SPECIALTY);

    let doctor = store
        .doctor_by_specialty(wanted)
        .ok_or(CommandError::NoSpecialist)?;
    Ok(format!("Recommended doctor: {}", describe(doctor)))
}

pub(super) fn view_appointments(user: &User, store: &DomainStore) -> String {
    let lines: Vec<String> = store
        .appointments_for(&user.id)
        .map(|a| format!("- Appointment with {} at {}", a.doctor_name, a.slot))
        .collect();

    if lines.is_empty() {
        return "You have no appointments.".to_string();
    }
    format!("Your appointments:\n{}", lines.join("\n"))
}
