//! Canned symptom advice keyed by keyword.

/// Reply used when a keyword has no entry in [`SYMPTOMS`].
pub const NO_INFORMATION: &str = "Sorry, I have no information on that.";

/// Symptom keywords and their advice, in match priority order.
///
/// Order matters: [`match_symptom`] returns the first keyword contained in the
/// input, so an input mentioning several symptoms resolves to the earliest one.
pub const SYMPTOMS: &[(&str, &str)] = &[
    (
        "headache",
        "Use a hot or cold compress on your head or neck. Try gentle massage. Drink small amounts of caffeine. Take over-the-counter pain relievers like ibuprofen or aspirin.",
    ),
    (
        "fever",
        "If you have a fever rest, stay hydrated, and take fever-reducing medicine like acetaminophen or ibuprofen.",
    ),
    (
        "toothache",
        "Rinse your mouth with warm salt water. Use a cold compress on your cheek. Apply clove oil to the tooth. Take over-the-counter painkillers like ibuprofen.",
    ),
    (
        "diarrhea",
        "Drink plenty of fluids and oral rehydration solution. Eat bland foods like bananas and rice. Avoid dairy, caffeine, and greasy food. Rest as much as possible.",
    ),
    (
        "chill",
        "Wear warm clothing and use blankets. Drink hot tea or soup. Rest and check for fever. Use a warm compress if you feel tense or achy.",
    ),
    (
        "runny nose",
        "Drink lots of water. Use a saline spray or rinse. Try a warm compress on your face. Rest and avoid allergens or irritants.",
    ),
    (
        "vomiting",
        "Sip water or electrolyte drinks slowly. Avoid solid food until vomiting stops. Eat plain food like toast or crackers after. Rest and avoid strong smells.",
    ),
    (
        "cut",
        "Wash the cut with water and mild soap. Press with a clean cloth to stop bleeding. Apply antiseptic and cover with a bandage. Change the bandage daily.",
    ),
];

/// Returns the advice for an exact keyword, or [`NO_INFORMATION`].
pub fn info_for(keyword: &str) -> &'static str {
    SYMPTOMS
        .iter()
        .find(|(key, _)| *key == keyword)
        .map(|(_, advice)| *advice)
        .unwrap_or(NO_INFORMATION)
}

/// Finds the first symptom keyword contained in already-lowercased input.
pub fn match_symptom(lower_input: &str) -> Option<&'static str> {
    SYMPTOMS
        .iter()
        .map(|(key, _)| *key)
        .find(|key| lower_input.contains(key))
}
