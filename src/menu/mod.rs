//! Menus: the exclusive owners of items.
//!
//! A [`Menu`] is a cheap, cloneable handle. All clones share one listing
//! table, guarded by a single lock, and one [`MenuId`].
//!
//! # Invariants
//! - An item is listed on at most one menu at a time.
//! - The items listed on a menu are exactly the items whose back-reference
//!   points at that menu.
//!
//! Both are kept by taking the menu lock before the item's latch in every
//! mutation, so a listing and its back-reference always change together.

pub mod error;

pub use error::*;

use crate::item::ItemRef;
use crate::model::{ItemId, MenuId};
use crate::sync::lock;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::{Arc, Mutex, Weak};
use tracing::{debug, info, instrument, warn};

/// A collection of items, with the tax-class rates shared by every menu.
#[derive(Clone)]
pub struct Menu {
    shared: Arc<MenuShared>,
}

struct MenuShared {
    id: MenuId,
    listings: Mutex<HashMap<ItemId, Listing>>,
}

/// An item together with the price it was listed at.
struct Listing {
    item: ItemRef,
    price: Decimal,
}

/// Non-owning link from an item back to its menu.
#[derive(Clone)]
pub(crate) struct WeakMenu {
    id: MenuId,
    shared: Weak<MenuShared>,
}

impl WeakMenu {
    pub(crate) fn id(&self) -> MenuId {
        self.id
    }

    pub(crate) fn is_live(&self) -> bool {
        self.shared.strong_count() > 0
    }

    pub(crate) fn upgrade(&self) -> Option<Menu> {
        self.shared.upgrade().map(|shared| Menu { shared })
    }
}

impl Menu {
    /// Tax rate applied to food, 10%.
    pub const FOOD_TAX: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

    /// Tax rate applied to drinks, 18%.
    pub const DRINK_TAX: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

    /// Creates an empty menu with a fresh id.
    pub fn new() -> Self {
        let menu = Self {
            shared: Arc::new(MenuShared {
                id: MenuId::next(),
                listings: Mutex::new(HashMap::new()),
            }),
        };
        debug!(menu_id = %menu.id(), "Menu created");
        menu
    }

    pub fn id(&self) -> MenuId {
        self.shared.id
    }

    pub fn food_tax(&self) -> Decimal {
        Self::FOOD_TAX
    }

    pub fn drink_tax(&self) -> Decimal {
        Self::DRINK_TAX
    }

    /// Lists `item` on this menu and points the item back at it.
    ///
    /// # Errors
    /// Returns [`MenuError::AlreadyAssigned`] if the item is already on any
    /// menu, including this one. Nothing changes in that case.
    #[instrument(skip(self, item), fields(menu_id = %self.id(), item_id = %item.id()))]
    pub fn add_item(&self, item: &ItemRef) -> Result<(), MenuError> {
        let mut listings = lock(&self.shared.listings);
        if !item.assign_menu(self) {
            warn!("Item already assigned to a menu");
            return Err(MenuError::AlreadyAssigned { item: item.id() });
        }
        listings.insert(
            item.id(),
            Listing {
                item: Arc::clone(item),
                price: item.price(),
            },
        );
        info!(size = listings.len(), "Item added");
        Ok(())
    }

    /// Drops `item` from this menu and clears its back-reference, so it
    /// can be added to a menu again.
    ///
    /// # Errors
    /// Returns [`MenuError::NotOnMenu`] if the item is not listed here.
    #[instrument(skip(self, item), fields(menu_id = %self.id(), item_id = %item.id()))]
    pub fn remove_item(&self, item: &ItemRef) -> Result<(), MenuError> {
        let mut listings = lock(&self.shared.listings);
        if listings.remove(&item.id()).is_none() {
            warn!("Item not on menu");
            return Err(MenuError::NotOnMenu {
                item: item.id(),
                menu: self.id(),
            });
        }
        item.clear_menu();
        info!(size = listings.len(), "Item removed");
        Ok(())
    }

    /// Snapshot of the listed items.
    ///
    /// The returned set is a copy: later changes to the menu do not show up
    /// in it.
    pub fn items(&self) -> HashSet<ItemRef> {
        lock(&self.shared.listings)
            .values()
            .map(|listing| Arc::clone(&listing.item))
            .collect()
    }

    /// Price `item` was listed at, if it is on this menu.
    pub fn listed_price(&self, item: &ItemRef) -> Option<Decimal> {
        lock(&self.shared.listings)
            .get(&item.id())
            .map(|listing| listing.price)
    }

    pub fn contains(&self, item: &ItemRef) -> bool {
        lock(&self.shared.listings).contains_key(&item.id())
    }

    pub fn len(&self) -> usize {
        lock(&self.shared.listings).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn downgrade(&self) -> WeakMenu {
        WeakMenu {
            id: self.id(),
            shared: Arc::downgrade(&self.shared),
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Menu {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Menu {}

impl Debug for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Menu")
            .field("id", &self.id())
            .field("len", &self.len())
            .finish()
    }
}
