//! Identifiers and tax capability for purchasable items.
//!
//! # Extending
//! A new kind of item (e.g. a dessert) only needs a type implementing
//! [`TaxableItem`]. [`Menu`](crate::menu::Menu) and [`Order`](crate::order::Order)
//! work with any implementation and never look at the concrete type.

use crate::menu::Menu;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Type-safe identifier for Items.
///
/// Unique per process, so comparing ids is the same as comparing item identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Allocates the next unused id.
    pub(crate) fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::SeqCst))
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// The tax capability every item variant must supply.
///
/// Implementations usually read one of the menu's tax-class rates. The
/// method is only ever called once the item has been assigned to `menu`.
pub trait TaxableItem: Debug + Send + Sync {
    /// Tax to add on top of the price, as a proportion (`0.10` for 10%).
    fn applicable_tax_rate(&self, menu: &Menu) -> Decimal;

    /// Short human-readable name of the variant, used in logs.
    fn label(&self) -> &'static str {
        "item"
    }
}

/// An item taxed at the menu's food rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Food;

impl TaxableItem for Food {
    fn applicable_tax_rate(&self, menu: &Menu) -> Decimal {
        menu.food_tax()
    }

    fn label(&self) -> &'static str {
        "food"
    }
}

/// An item taxed at the menu's drink rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drink;

impl TaxableItem for Drink {
    fn applicable_tax_rate(&self, menu: &Menu) -> Decimal {
        menu.drink_tax()
    }

    fn label(&self) -> &'static str {
        "drink"
    }
}
