use crate::bot::input::Input;
use crate::bot::models::{DEFAULT_REPLY, HELP_TEXT};
use crate::knowledge;

pub(super) fn help() -> String {
    HELP_TEXT.to_string()
}

pub(super) fn symptom_info(input: &Input) -> String {
    match knowledge::match_symptom(input.normalized()) {
        Some(keyword) => knowledge::info_for(keyword).to_string(),
        None => "I'm not sure how to help with that symptom.".to_string(),
    }
}

pub(super) fn fallback() -> String {
    DEFAULT_REPLY.to_string()
}
