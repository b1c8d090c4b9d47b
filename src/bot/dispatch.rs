//! First-match dispatch over [`Handler::PRIORITY`].

use super::handlers::Handler;
use super::input::Input;
use crate::store::DomainStore;
use crate::user::User;

/// The handler that will answer `input`. Always succeeds because
/// [`Handler::Default`] matches everything.
pub fn select_handler(input: &Input) -> Handler {
    Handler::PRIORITY
        .into_iter()
        .find(|handler| handler.can_handle(input))
        .unwrap_or(Handler::Default)
}

/// Answers one line of input, mutating the user and store as the matched
/// handler requires. Rejected commands come back as ordinary replies.
pub fn dispatch(text: &str, user: &mut User, store: &mut DomainStore) -> String {
    user.record(text);

    let input = Input::new(text);
    let handler = select_handler(&input);
    tracing::debug!(handler = handler.name(), input = input.raw(), "dispatching");

    handler
        .handle(&input, user, store)
        .unwrap_or_else(|err| {
            tracing::debug!(handler = handler.name(), error = ?err, "command rejected");
            err.to_string()
        })
}
