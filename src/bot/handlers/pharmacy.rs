//! Pharmacy catalog, purchases and cart edits.

use super::HandlerResult;
use crate::bot::input::{parse_int, Input};
use crate::error::CommandError;
use crate::store::{CartItem, DomainStore};
use crate::user::{Removal, User};

const BUY_USAGE: &str = "Please specify the medication (e.g., 'buy Ibuprofen 2').";
const ADD_USAGE: &str =
    "Please use the format 'add <medication> <quantity>' (e.g., 'add Aspirin 2').";
const REMOVE_USAGE: &str =
    "Please specify the medication you want to remove (e.g., 'remove 1 Ibuprofen' or 'remove Ibuprofen').";

/// Splits `<name...> <qty>` where the trailing quantity is optional.
fn name_and_trailing_quantity(args: &[&str]) -> (String, Option<i64>) {
    match args {
        [name @ .., last] if !name.is_empty() => match parse_int(last) {
            Some(quantity) => (name.join(" "), Some(quantity)),
            None => (args.join(" "), None),
        },
        _ => (args.join(" "), None),
    }
}

fn positive(quantity: i64) -> Result<u32, CommandError> {
    u32::try_from(quantity)
        .ok()
        .filter(|q| *q > 0)
        .ok_or(CommandError::InvalidQuantity)
}

fn catalog_listing(store: &DomainStore) -> String {
    let mut lines = vec!["Available medications in the pharmacy:".to_string()];
    for item in &store.catalog {
        lines.push(format!(
            "- {}: ${} (Availability: {})",
            item.name, item.price, item.available
        ));
    }
    lines.join("\n")
}

/// Moves `quantity` units from the shelf into the user's cart.
///
/// Nothing changes unless the medication exists and enough stock is left.
fn purchase(user: &mut User, store: &mut DomainStore, name: &str, quantity: u32) -> HandlerResult {
    let item = store
        .find_medicine_mut(name)
        .ok_or(CommandError::MedicationNotFound)?;
    if item.available < quantity {
        return Err(CommandError::OutOfStock {
            name: item.name.clone(),
            available: item.available,
        });
    }

    item.available -= quantity;
    let in_cart = user.add_to_cart(CartItem {
        name: item.name.clone(),
        quantity,
        unit_price: Some(item.price),
    });
    tracing::debug!(
        user = %user.id,
        medication = %item.name,
        quantity,
        in_cart,
        stock = item.available,
        "purchase"
    );
    Ok(format!("{} x {} has been added to your cart.", quantity, item.name))
}

/// `pharmacy` lists the shelf; `buy <medication> [quantity]` purchases.
pub(super) fn pharmacy(input: &Input, user: &mut User, store: &mut DomainStore) -> HandlerResult {
    if !input.starts_with_word("buy") {
        return Ok(catalog_listing(store));
    }

    let args = input.args();
    if args.is_empty() {
        return Err(CommandError::usage(BUY_USAGE));
    }
    let (name, quantity) = name_and_trailing_quantity(&args);
    let quantity = positive(quantity.unwrap_or(1))?;
    purchase(user, store, &name, quantity)
}

pub(super) fn add(input: &Input, user: &mut User, store: &mut DomainStore) -> HandlerResult {
    let args = input.args();
    let (name, Some(quantity)) = name_and_trailing_quantity(&args) else {
        return Err(CommandError::usage(ADD_USAGE));
    };
    let quantity = positive(quantity)?;
    purchase(user, store, &name, quantity)
}

/// Accepts both `remove <qty> <medication>` and `remove <medication> [qty]`.
/// Only a positive leading integer selects the first form. Removed units go
/// back on the shelf.
pub(super) fn remove(input: &Input, user: &mut User, store: &mut DomainStore) -> HandlerResult {
    let args = input.args();
    let (name, quantity) = match args.as_slice() {
        [] => return Err(CommandError::usage(REMOVE_USAGE)),
        [first, rest @ ..] if parse_int(first).is_some_and(|q| q > 0) => {
            if rest.is_empty() {
                return Err(CommandError::usage(REMOVE_USAGE));
            }
            (rest.join(" "), parse_int(first))
        }
        _ => name_and_trailing_quantity(&args),
    };
    let quantity = positive(quantity.unwrap_or(1))?;

    let removal = user
        .remove_from_cart(&name, quantity)
        .ok_or_else(|| CommandError::NotInCart(name.clone()))?;
    if let Some(item) = store.find_medicine_mut(&name) {
        item.available += removal.removed();
    }

    Ok(match removal {
        Removal::Decremented {
            name,
            removed,
            remaining,
        } => format!(
            "Removed {} x {} from your cart. Remaining quantity: {}.",
            removed, name, remaining
        ),
        Removal::Removed { name, .. } => format!("{} has been removed from your cart.", name),
    })
}

pub(super) fn checkout(user: &mut User) -> String {
    let total = user.checkout();
    format!("Your total is ${}. Thank you for your purchase!", total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (User, DomainStore) {
        (User::new("u1", "Alice"), DomainStore::seeded())
    }

    fn stock(store: &mut DomainStore, name: &str) -> u32 {
        store.find_medicine_mut(name).unwrap().available
    }

    #[test]
    fn listing_shows_price_and_stock() {
        let (mut user, mut store) = setup();
        let reply = pharmacy(&Input::new("pharmacy"), &mut user, &mut store).unwrap();
        assert_eq!(
            reply,
            "Available medications in the pharmacy:\n\
             - Ibuprofen: $10 (Availability: 20)\n\
             - Paracetamol: $5 (Availability: 50)\n\
             - Cough Syrup: $8 (Availability: 10)\n\
             - Aspirin: $7 (Availability: 30)"
        );
    }

    #[test]
    fn buy_defaults_to_one_and_decrements_stock() {
        let (mut user, mut store) = setup();
        let reply = pharmacy(&Input::new("buy ibuprofen"), &mut user, &mut store).unwrap();
        assert_eq!(reply, "1 x Ibuprofen has been added to your cart.");
        assert_eq!(stock(&mut store, "Ibuprofen"), 19);

        pharmacy(&Input::new("buy Cough Syrup 3"), &mut user, &mut store).unwrap();
        assert_eq!(stock(&mut store, "cough syrup"), 7);
        assert_eq!(user.cart()[1].quantity, 3);
    }

    #[test]
    fn buy_more_than_stock_changes_nothing() {
        let (mut user, mut store) = setup();
        let err = pharmacy(&Input::new("buy Cough Syrup 11"), &mut user, &mut store).unwrap_err();
        assert_eq!(err.to_string(), "Sorry, only 10 Cough Syrup available.");
        assert_eq!(stock(&mut store, "Cough Syrup"), 10);
        assert!(user.cart().is_empty());
    }

    #[test]
    fn buy_validates_input() {
        let (mut user, mut store) = setup();
        assert_eq!(
            pharmacy(&Input::new("buy Aspirin 0"), &mut user, &mut store),
            Err(CommandError::InvalidQuantity)
        );
        assert_eq!(
            pharmacy(&Input::new("buy Unobtainium"), &mut user, &mut store),
            Err(CommandError::MedicationNotFound)
        );
        assert!(matches!(
            pharmacy(&Input::new("buy"), &mut user, &mut store),
            Err(CommandError::Usage { .. })
        ));
        assert!(user.cart().is_empty());
    }

    #[test]
    fn add_merges_with_bought_items() {
        let (mut user, mut store) = setup();
        pharmacy(&Input::new("buy Aspirin 2"), &mut user, &mut store).unwrap();
        add(&Input::new("add aspirin 3"), &mut user, &mut store).unwrap();

        assert_eq!(user.cart().len(), 1);
        assert_eq!(user.cart()[0].quantity, 5);
        assert_eq!(stock(&mut store, "Aspirin"), 25);
        assert!(matches!(
            add(&Input::new("add Aspirin"), &mut user, &mut store),
            Err(CommandError::Usage { .. })
        ));
    }

    #[test]
    fn remove_accepts_both_argument_orders() {
        let (mut user, mut store) = setup();
        pharmacy(&Input::new("buy Paracetamol 5"), &mut user, &mut store).unwrap();

        let reply = remove(&Input::new("remove 2 paracetamol"), &mut user, &mut store).unwrap();
        assert_eq!(reply, "Removed 2 x Paracetamol from your cart. Remaining quantity: 3.");

        let reply = remove(&Input::new("remove Paracetamol 1"), &mut user, &mut store).unwrap();
        assert!(reply.ends_with("Remaining quantity: 2."));

        let reply = remove(&Input::new("remove Paracetamol 10"), &mut user, &mut store).unwrap();
        assert_eq!(reply, "Paracetamol has been removed from your cart.");
        assert!(user.cart().is_empty());
        assert_eq!(stock(&mut store, "Paracetamol"), 50);
    }

    #[test]
    fn remove_errors() {
        let (mut user, mut store) = setup();
        assert_eq!(
            remove(&Input::new("remove Aspirin"), &mut user, &mut store),
            Err(CommandError::NotInCart("Aspirin".into()))
        );
        pharmacy(&Input::new("buy Aspirin"), &mut user, &mut store).unwrap();
        assert_eq!(
            remove(&Input::new("remove Aspirin 0"), &mut user, &mut store),
            Err(CommandError::InvalidQuantity)
        );
        assert_eq!(
            remove(&Input::new("remove Aspirin -1"), &mut user, &mut store),
            Err(CommandError::InvalidQuantity)
        );
        assert!(matches!(
            remove(&Input::new("remove 2"), &mut user, &mut store),
            Err(CommandError::Usage { .. })
        ));
        assert_eq!(user.cart()[0].quantity, 1);
    }

    #[test]
    fn non_positive_leading_number_is_part_of_the_name() {
        let (mut user, mut store) = setup();
        pharmacy(&Input::new("buy Aspirin 2"), &mut user, &mut store).unwrap();

        assert_eq!(
            remove(&Input::new("remove 0 aspirin"), &mut user, &mut store),
            Err(CommandError::NotInCart("0 aspirin".into()))
        );
        assert_eq!(
            remove(&Input::new("remove -1 aspirin"), &mut user, &mut store),
            Err(CommandError::NotInCart("-1 aspirin".into()))
        );
        assert_eq!(user.cart()[0].quantity, 2);
        assert_eq!(stock(&mut store, "Aspirin"), 28);
    }

    #[test]
    fn checkout_reports_total_and_empties_cart() {
        let (mut user, mut store) = setup();
        assert_eq!(checkout(&mut user), "Your total is $0. Thank you for your purchase!");

        pharmacy(&Input::new("buy Ibuprofen 2"), &mut user, &mut store).unwrap();
        pharmacy(&Input::new("buy Aspirin"), &mut user, &mut store).unwrap();
        assert_eq!(checkout(&mut user), "Your total is $27. Thank you for your purchase!");
        assert_eq!(user.view_cart(), "Your cart is empty.");
    }
}
