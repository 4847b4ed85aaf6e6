//! Priced, purchasable items and their taxed price.
//!
//! An [`Item`] is always shared as an [`ItemRef`] so that a menu and any
//! number of orders can point at the same instance. The link back to the
//! owning menu is a set-once latch that only [`Menu`](crate::menu::Menu)
//! flips.

pub mod error;

pub use error::*;

use crate::menu::{Menu, WeakMenu};
use crate::model::{Drink, Food, ItemId, MenuId, TaxableItem};
use crate::sync::lock;
use rust_decimal::Decimal;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Shared handle to an [`Item`].
pub type ItemRef = Arc<Item>;

/// A purchasable unit with a fixed price.
pub struct Item {
    id: ItemId,
    name: String,
    price: Decimal,
    kind: Box<dyn TaxableItem>,
    menu: Mutex<Option<WeakMenu>>,
}

impl Item {
    /// Creates a new, unassigned item.
    ///
    /// # Arguments
    /// * `name` - Display name, informational only
    /// * `price` - Pre-tax price, fixed for the item's lifetime
    /// * `kind` - The variant deciding which tax rate applies
    ///
    /// # Errors
    /// Returns [`ItemError::NegativePrice`] when `price` is below zero.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        kind: impl TaxableItem + 'static,
    ) -> Result<ItemRef, ItemError> {
        if price < Decimal::ZERO {
            return Err(ItemError::NegativePrice(price));
        }
        let item = Self {
            id: ItemId::next(),
            name: name.into(),
            price,
            kind: Box::new(kind),
            menu: Mutex::new(None),
        };
        debug!(item_id = %item.id, kind = item.kind.label(), price = %item.price, "Item created");
        Ok(Arc::new(item))
    }

    /// Creates an item taxed at the food rate.
    pub fn food(name: impl Into<String>, price: Decimal) -> Result<ItemRef, ItemError> {
        Self::new(name, price, Food)
    }

    /// Creates an item taxed at the drink rate.
    pub fn drink(name: impl Into<String>, price: Decimal) -> Result<ItemRef, ItemError> {
        Self::new(name, price, Drink)
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// The menu this item belongs to, if any.
    ///
    /// Items only hold a weak link. Once every handle to the menu has been
    /// dropped the item counts as unassigned again.
    pub fn menu(&self) -> Option<Menu> {
        lock(&self.menu).as_ref().and_then(WeakMenu::upgrade)
    }

    /// Id of the menu this item belongs to, without touching the menu itself.
    pub fn menu_id(&self) -> Option<MenuId> {
        lock(&self.menu)
            .as_ref()
            .filter(|link| link.is_live())
            .map(WeakMenu::id)
    }

    pub fn is_assigned(&self) -> bool {
        self.menu_id().is_some()
    }

    /// Tax proportion for this item, as decided by its variant.
    ///
    /// # Errors
    /// Returns [`ItemError::Unassigned`] before the item is on a menu.
    pub fn applicable_tax_rate(&self) -> Result<Decimal, ItemError> {
        let menu = self.menu().ok_or(ItemError::Unassigned(self.id))?;
        Ok(self.kind.applicable_tax_rate(&menu))
    }

    /// Price with the applicable tax added.
    ///
    /// # Errors
    /// Returns [`ItemError::Unassigned`] before the item is on a menu.
    pub fn price_with_tax(&self) -> Result<Decimal, ItemError> {
        let rate = self.applicable_tax_rate()?;
        Ok(self.price + self.price * rate)
    }

    /// Latches the back-reference to `menu`.
    ///
    /// Returns `false` and leaves the current assignment alone when the item
    /// already has a live menu.
    pub(crate) fn assign_menu(&self, menu: &Menu) -> bool {
        let mut slot = lock(&self.menu);
        if slot.as_ref().is_some_and(WeakMenu::is_live) {
            return false;
        }
        *slot = Some(menu.downgrade());
        true
    }

    /// Releases the back-reference so the item can be assigned again.
    pub(crate) fn clear_menu(&self) {
        *lock(&self.menu) = None;
    }
}

impl Debug for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("price", &self.price)
            .field("kind", &self.kind)
            .field("menu", &self.menu_id())
            .finish()
    }
}

// Identity semantics: two handles are equal only if they are the same item.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
