use thiserror::Error;

/// Why a recognized command could not be carried out.
///
/// The `Display` text is the reply shown to the user; these never end a
/// conversation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{usage}")]
    Usage { usage: &'static str },

    #[error("Doctor not found.")]
    DoctorNotFound,

    #[error("Invalid doctor selection. Use a number from the list or a doctor ID like D2.")]
    InvalidSelection,

    #[error("No doctor selected. Use 'select <n>' first or 'rate <doctorId> <1-5>'.")]
    NoDoctorSelected,

    #[error("Sorry, no doctor found for that speciality.")]
    NoSpecialist,

    #[error("Rating must be a number between 1 and 5.")]
    InvalidRating,

    #[error("Quantity must be a positive number.")]
    InvalidQuantity,

    #[error("Medication not found.")]
    MedicationNotFound,

    #[error("Sorry, only {available} {name} available.")]
    OutOfStock { name: String, available: u32 },

    #[error("{0} was not found in your cart.")]
    NotInCart(String),
}

impl CommandError {
    pub fn usage(usage: &'static str) -> Self {
        CommandError::Usage { usage }
    }
}

/// Failures at the process boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read input: {0}")]
    Input(#[source] std::io::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
