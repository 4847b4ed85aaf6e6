//! Orders: item selections drawn from one menu, and their totals.
//!
//! # Invariants
//! - A new selection must be on the menu the first selection is on right
//!   now. An empty order takes items from any menu.
//! - Selections keep insertion order and may contain the same item twice.
//!
//! [`GroupOrder`] changes only the tip rule.

pub mod error;
mod group;

pub use error::*;
pub use group::*;

use crate::item::ItemRef;
use crate::model::MenuId;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// A list of items that will be paid for together.
#[derive(Debug, Clone, Default)]
pub struct Order {
    selections: Vec<ItemRef>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered items, in the order they were added.
    pub fn selections(&self) -> &[ItemRef] {
        &self.selections
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Menu the first selection is currently on.
    ///
    /// `None` when the order is empty or its first item is unassigned.
    pub fn menu_id(&self) -> Option<MenuId> {
        self.selections.first().and_then(|first| first.menu_id())
    }

    /// Appends `item`.
    ///
    /// An empty order accepts any item. Otherwise `item` must be on the same
    /// menu as the first selection, as that selection stands now.
    ///
    /// # Errors
    /// Returns [`OrderError::MenuMismatch`] when `item` is from another menu.
    /// The order is unchanged in that case.
    #[instrument(skip(self, item), fields(item_id = %item.id()))]
    pub fn add_item(&mut self, item: &ItemRef) -> Result<(), OrderError> {
        let found = item.menu_id();
        match self.selections.first() {
            None => debug!(menu_id = ?found, "First selection picks the menu"),
            Some(first) => {
                let expected = first.menu_id();
                if expected != found {
                    warn!(expected = ?expected, found = ?found, "Item from another menu");
                    return Err(OrderError::MenuMismatch {
                        item: item.id(),
                        expected,
                        found,
                    });
                }
            }
        }
        self.selections.push(Arc::clone(item));
        info!(size = self.selections.len(), "Item added to order");
        Ok(())
    }

    /// Removes the first occurrence of `item`.
    ///
    /// # Errors
    /// Returns [`OrderError::NotInOrder`] when `item` was never added.
    #[instrument(skip(self, item), fields(item_id = %item.id()))]
    pub fn remove_item(&mut self, item: &ItemRef) -> Result<(), OrderError> {
        let Some(index) = self.selections.iter().position(|s| Arc::ptr_eq(s, item)) else {
            warn!("Item not in order");
            return Err(OrderError::NotInOrder(item.id()));
        };
        self.selections.remove(index);
        if self.selections.is_empty() {
            debug!("Order empty, any menu accepted");
        }
        info!(size = self.selections.len(), "Item removed from order");
        Ok(())
    }

    /// Sum of every selection's price with tax.
    ///
    /// # Errors
    /// Returns [`OrderError::Pricing`] if a selection is not on a menu.
    pub fn total_with_tax(&self) -> Result<Decimal, OrderError> {
        self.selections
            .iter()
            .try_fold(Decimal::ZERO, |total, item| -> Result<Decimal, OrderError> {
                Ok(total + item.price_with_tax()?)
            })
    }

    /// Total with tax, plus a tip of `tip` times that total.
    ///
    /// # Arguments
    /// * `tip` - Proportion of the tax-inclusive total, e.g. `0.15` for 15%
    pub fn total_with_tax_and_tip(&self, tip: Decimal) -> Result<Decimal, OrderError> {
        Ok(self.total_with_tax()? * (Decimal::ONE + tip))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemError};
    use crate::menu::Menu;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn listed(menu: &Menu, item: ItemRef) -> ItemRef {
        menu.add_item(&item).unwrap();
        item
    }

    #[test]
    fn test_empty_order_totals_zero() {
        let order = Order::new();

        assert!(order.is_empty());
        assert_eq!(order.menu_id(), None);
        assert_eq!(order.total_with_tax().unwrap(), Decimal::ZERO);
        assert_eq!(order.total_with_tax_and_tip(dec("0.15")).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_single_food_totals() {
        let menu = Menu::new();
        let burger = listed(&menu, Item::food("Burger", dec("10.00")).unwrap());
        let mut order = Order::new();

        order.add_item(&burger).unwrap();

        assert_eq!(order.menu_id(), Some(menu.id()));
        assert_eq!(order.total_with_tax().unwrap(), dec("11.0"));
        assert_eq!(order.total_with_tax_and_tip(dec("0.10")).unwrap(), dec("12.1"));
    }

    #[test]
    fn test_mixed_food_and_drink_total() {
        let menu = Menu::new();
        let burger = listed(&menu, Item::food("Burger", dec("10.00")).unwrap());
        let soda = listed(&menu, Item::drink("Soda", dec("2.00")).unwrap());
        let mut order = Order::new();

        order.add_item(&burger).unwrap();
        order.add_item(&soda).unwrap();

        // 11.00 + 2.36
        assert_eq!(order.total_with_tax().unwrap(), dec("13.36"));
    }

    #[test]
    fn test_rejects_item_from_other_menu() {
        let lunch = Menu::new();
        let dinner = Menu::new();
        let a = listed(&lunch, Item::food("Salad", dec("8.00")).unwrap());
        let b = listed(&dinner, Item::food("Steak", dec("30.00")).unwrap());
        let mut order = Order::new();

        order.add_item(&a).unwrap();
        let result = order.add_item(&b);

        assert_eq!(
            result,
            Err(OrderError::MenuMismatch {
                item: b.id(),
                expected: Some(lunch.id()),
                found: Some(dinner.id()),
            })
        );
        assert_eq!(order.len(), 1);
        assert!(!order.selections().iter().any(|s| Arc::ptr_eq(s, &b)));
    }

    #[test]
    fn test_remove_one_of_duplicates() {
        let menu = Menu::new();
        let fries = listed(&menu, Item::food("Fries", dec("3.00")).unwrap());
        let mut order = Order::new();
        order.add_item(&fries).unwrap();
        order.add_item(&fries).unwrap();

        order.remove_item(&fries).unwrap();

        assert_eq!(order.len(), 1);
        assert!(Arc::ptr_eq(&order.selections()[0], &fries));
        assert_eq!(order.menu_id(), Some(menu.id()));
    }

    #[test]
    fn test_remove_missing_item_fails() {
        let menu = Menu::new();
        let fries = listed(&menu, Item::food("Fries", dec("3.00")).unwrap());
        let mut order = Order::new();

        assert_eq!(order.remove_item(&fries), Err(OrderError::NotInOrder(fries.id())));
    }

    #[test]
    fn test_emptied_order_accepts_new_menu() {
        let lunch = Menu::new();
        let dinner = Menu::new();
        let a = listed(&lunch, Item::food("Salad", dec("8.00")).unwrap());
        let b = listed(&dinner, Item::food("Steak", dec("30.00")).unwrap());
        let mut order = Order::new();

        order.add_item(&a).unwrap();
        order.remove_item(&a).unwrap();
        assert_eq!(order.menu_id(), None);

        order.add_item(&b).unwrap();
        assert_eq!(order.menu_id(), Some(dinner.id()));
    }

    #[test]
    fn test_follows_first_selection_to_new_menu() {
        let lunch = Menu::new();
        let dinner = Menu::new();
        let salad = listed(&lunch, Item::food("Salad", dec("8.00")).unwrap());
        let steak = listed(&dinner, Item::food("Steak", dec("30.00")).unwrap());
        let soup = listed(&lunch, Item::food("Soup", dec("5.00")).unwrap());
        let mut order = Order::new();
        order.add_item(&salad).unwrap();

        lunch.remove_item(&salad).unwrap();
        dinner.add_item(&salad).unwrap();

        assert_eq!(order.menu_id(), Some(dinner.id()));
        order.add_item(&steak).unwrap();
        assert_eq!(
            order.add_item(&soup),
            Err(OrderError::MenuMismatch {
                item: soup.id(),
                expected: Some(dinner.id()),
                found: Some(lunch.id()),
            })
        );
        assert!(order
            .selections()
            .iter()
            .all(|s| s.menu_id() == Some(dinner.id())));
    }

    #[test]
    fn test_unassigned_items_cannot_be_priced() {
        let loose = Item::food("Mystery", dec("1.00")).unwrap();
        let mut order = Order::new();

        order.add_item(&loose).unwrap();

        assert_eq!(
            order.total_with_tax(),
            Err(OrderError::Pricing(ItemError::Unassigned(loose.id())))
        );
    }
}
