//! The person chatting with the bot, plus their per-session state.

use crate::store::helpers::{format_item_summary, merge_into_cart, same_name};
use crate::store::models::CartItem;

/// Outcome of taking units of a medication out of the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// Some units remain in the cart
    Decremented { name: String, removed: u32, remaining: u32 },
    /// The entry is gone; `removed` is what was actually left in the cart
    Removed { name: String, removed: u32 },
}

impl Removal {
    pub fn removed(&self) -> u32 {
        match self {
            Removal::Decremented { removed, .. } | Removal::Removed { removed, .. } => *removed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    cart: Vec<CartItem>,
    history: Vec<String>,
    /// Id of the last selected doctor. Resolved against the store on use.
    selected_doctor: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cart: Vec::new(),
            history: Vec::new(),
            selected_doctor: None,
        }
    }

    pub fn record(&mut self, input: &str) {
        self.history.push(input.to_string());
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    pub fn select_doctor(&mut self, doctor_id: &str) {
        self.selected_doctor = Some(doctor_id.to_string());
    }

    pub fn selected_doctor(&self) -> Option<&str> {
        self.selected_doctor.as_deref()
    }

    /// Adds a medication, merging with an existing entry of the same name.
    /// Returns the quantity now in the cart.
    pub fn add_to_cart(&mut self, item: CartItem) -> u32 {
        merge_into_cart(&mut self.cart, item)
    }

    /// Takes up to `quantity` units of `name` out of the cart.
    ///
    /// Returns `None` when the medication is not in the cart.
    pub fn remove_from_cart(&mut self, name: &str, quantity: u32) -> Option<Removal> {
        let index = self.cart.iter().position(|i| same_name(&i.name, name))?;
        let entry = &mut self.cart[index];

        if quantity >= entry.quantity {
            let removed = self.cart.remove(index);
            return Some(Removal::Removed {
                name: removed.name,
                removed: removed.quantity,
            });
        }

        entry.quantity -= quantity;
        Some(Removal::Decremented {
            name: entry.name.clone(),
            removed: quantity,
            remaining: entry.quantity,
        })
    }

    /// Renders the cart with per-line subtotals and a grand total.
    pub fn view_cart(&self) -> String {
        if self.cart.is_empty() {
            return "Your cart is empty.".to_string();
        }

        let mut lines = vec!["Your cart contains the following items:".to_string()];
        for item in &self.cart {
            match item.unit_price {
                Some(_) => lines.push(format!(
                    "- {} x{}: ${}",
                    item.name,
                    item.quantity,
                    item.subtotal()
                )),
                None => lines.push(format!("- {} x{}", item.name, item.quantity)),
            }
        }
        lines.push(format!("Total: ${}", self.cart_total()));
        lines.join("\n")
    }

    pub fn cart_total(&self) -> u32 {
        self.cart.iter().map(CartItem::subtotal).sum()
    }

    /// Empties the cart and returns what was due.
    pub fn checkout(&mut self) -> u32 {
        let total = self.cart_total();
        let items = std::mem::take(&mut self.cart);
        if !items.is_empty() {
            tracing::info!(
                user = %self.id,
                total,
                items = %format_item_summary(&items),
                "checkout"
            );
        }
        total
    }
}
