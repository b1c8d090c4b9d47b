//! Command handlers
//!
//! Each [`Handler`] variant pairs a match predicate (`can_handle`) with an
//! action (`handle`). The dispatcher walks [`Handler::PRIORITY`] and runs the
//! first variant whose predicate accepts the input, so predicates may overlap
//! freely: position in the list decides.

mod doctors;
mod info;
mod pharmacy;

use super::input::Input;
use crate::error::CommandError;
use crate::knowledge;
use crate::store::DomainStore;
use crate::user::User;

pub type HandlerResult = Result<String, CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Help,
    SymptomInfo,
    ListDoctors,
    SelectDoctor,
    RateDoctor,
    BookAppointment,
    RecommendDoctor,
    Pharmacy,
    AddToCart,
    RemoveFromCart,
    ViewCart,
    Checkout,
    ViewAppointments,
    Default,
}

impl Handler {
    /// Match order. `Default` accepts everything and must stay last.
    ///
    /// Select/rate/book come before the "doctor" substring check of
    /// `RecommendDoctor` so that `select doctor D2` selects instead of
    /// recommending.
    pub const PRIORITY: [Handler; 14] = [
        Handler::Help,
        Handler::SymptomInfo,
        Handler::ListDoctors,
        Handler::SelectDoctor,
        Handler::RateDoctor,
        Handler::BookAppointment,
        Handler::RecommendDoctor,
        Handler::Pharmacy,
        Handler::AddToCart,
        Handler::RemoveFromCart,
        Handler::ViewCart,
        Handler::Checkout,
        Handler::ViewAppointments,
        Handler::Default,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Handler::Help => "help",
            Handler::SymptomInfo => "symptom_info",
            Handler::ListDoctors => "list_doctors",
            Handler::SelectDoctor => "select_doctor",
            Handler::RateDoctor => "rate_doctor",
            Handler::BookAppointment => "book_appointment",
            Handler::RecommendDoctor => "recommend_doctor",
            Handler::Pharmacy => "pharmacy",
            Handler::AddToCart => "add_to_cart",
            Handler::RemoveFromCart => "remove_from_cart",
            Handler::ViewCart => "view_cart",
            Handler::Checkout => "checkout",
            Handler::ViewAppointments => "view_appointments",
            Handler::Default => "default",
        }
    }

    pub fn can_handle(&self, input: &Input) -> bool {
        match self {
            Handler::Help => input.is("help"),
            Handler::SymptomInfo => knowledge::match_symptom(input.normalized()).is_some(),
            Handler::ListDoctors => input.is("list") || input.is("list doctors"),
            Handler::SelectDoctor => input.starts_with_word("select"),
            Handler::RateDoctor => input.starts_with_word("rate"),
            Handler::BookAppointment => input.starts_with_word("book"),
            Handler::RecommendDoctor => input.contains("recommend") || input.contains("doctor"),
            Handler::Pharmacy => input.is("pharmacy") || input.starts_with_word("buy"),
            Handler::AddToCart => input.starts_with_word("add"),
            Handler::RemoveFromCart => input.starts_with_word("remove"),
            Handler::ViewCart => input.is("view cart"),
            Handler::Checkout => input.contains("checkout"),
            Handler::ViewAppointments => input.is("view appointments"),
            Handler::Default => true,
        }
    }

    pub fn handle(&self, input: &Input, user: &mut User, store: &mut DomainStore) -> HandlerResult {
        match self {
            Handler::Help => Ok(info::help()),
            Handler::SymptomInfo => Ok(info::symptom_info(input)),
            Handler::ListDoctors => Ok(doctors::list(store)),
            Handler::SelectDoctor => doctors::select(input, user, store),
            Handler::RateDoctor => doctors::rate(input, user, store),
            Handler::BookAppointment => doctors::book(input, user, store),
            Handler::RecommendDoctor => doctors::recommend(input, store),
            Handler::Pharmacy => pharmacy::pharmacy(input, user, store),
            Handler::AddToCart => pharmacy::add(input, user, store),
            Handler::RemoveFromCart => pharmacy::remove(input, user, store),
            Handler::ViewCart => Ok(user.view_cart()),
            Handler::Checkout => Ok(pharmacy::checkout(user)),
            Handler::ViewAppointments => Ok(doctors::view_appointments(user, store)),
            Handler::Default => Ok(info::fallback()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_match(text: &str) -> Handler {
        let input = Input::new(text);
        Handler::PRIORITY
            .into_iter()
            .find(|h| h.can_handle(&input))
            .unwrap()
    }

    #[test]
    fn default_is_last_and_total() {
        assert_eq!(Handler::PRIORITY.last(), Some(&Handler::Default));
        assert!(Handler::Default.can_handle(&Input::new("")));
    }

    #[test]
    fn overlapping_predicates_resolve_by_position() {
        assert_eq!(first_match("select doctor D2"), Handler::SelectDoctor);
        assert_eq!(first_match("list doctors"), Handler::ListDoctors);
        assert_eq!(first_match("Which doctor should I see?"), Handler::RecommendDoctor);
        assert_eq!(first_match("my doctor said I have a fever"), Handler::SymptomInfo);
        assert_eq!(first_match("buy Aspirin 2"), Handler::Pharmacy);
        assert_eq!(first_match("add Aspirin 2"), Handler::AddToCart);
        assert_eq!(first_match("ready to checkout"), Handler::Checkout);
        assert_eq!(first_match("pharmacy hours?"), Handler::Default);
    }

    #[test]
    fn exact_commands_ignore_case_and_spacing() {
        assert_eq!(first_match("HELP"), Handler::Help);
        assert_eq!(first_match(" view   appointments "), Handler::ViewAppointments);
        assert_eq!(first_match("View Cart"), Handler::ViewCart);
        assert_eq!(first_match("help me"), Handler::Default);
    }
}
