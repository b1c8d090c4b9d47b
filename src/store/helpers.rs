//! Cart and Store Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::models::CartItem;
use uuid::Uuid;

/// Returns the provided `session_id` or creates a new UUID string when `None`.
pub fn get_or_create_session_id(session_id: Option<String>) -> String {
    session_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Case-insensitive name comparison used for doctors and medications.
pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Merges `incoming` into `cart_items`.
///
/// An entry with the same name (ignoring case) has its quantity increased and
/// keeps its original spelling; otherwise the item is appended. Returns the
/// resulting quantity for that medication.
pub fn merge_into_cart(cart_items: &mut Vec<CartItem>, incoming: CartItem) -> u32 {
    if let Some(existing) = cart_items
        .iter_mut()
        .find(|i| same_name(&i.name, &incoming.name))
    {
        existing.quantity += incoming.quantity;
        if existing.unit_price.is_none() {
            existing.unit_price = incoming.unit_price;
        }
        existing.quantity
    } else {
        let quantity = incoming.quantity;
        cart_items.push(incoming);
        quantity
    }
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x Aspirin, 1x Ibuprofen"`.
pub fn format_item_summary(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: u32) -> CartItem {
        CartItem {
            name: name.into(),
            quantity,
            unit_price: Some(7),
        }
    }

    #[test]
    fn merge_aggregates_case_insensitively() {
        let mut cart = Vec::new();
        assert_eq!(merge_into_cart(&mut cart, item("Aspirin", 2)), 2);
        assert_eq!(merge_into_cart(&mut cart, item("ASPIRIN", 3)), 5);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].name, "Aspirin");
        assert_eq!(cart[0].quantity, 5);
    }

    #[test]
    fn summary_lists_quantities() {
        let cart = vec![item("Aspirin", 2), item("Ibuprofen", 1)];
        assert_eq!(format_item_summary(&cart), "2x Aspirin, 1x Ibuprofen");
    }

    #[test]
    fn blank_session_id_is_replaced() {
        assert_eq!(get_or_create_session_id(Some("abc".into())), "abc");
        assert_ne!(get_or_create_session_id(Some("  ".into())), "  ");
        assert_eq!(get_or_create_session_id(None).len(), 32);
    }
}
