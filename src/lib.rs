//! # Restaurant Orders
//!
//! > **Menus, orders and what they cost.**
//!
//! This crate models a small restaurant: [`Item`](item::Item)s with a price,
//! [`Menu`](menu::Menu)s that list them, and [`Order`](order::Order)s that add
//! up a bill with tax and tip.
//!
//! ## 🏗️ Core Rules
//!
//! - An item is on at most one menu. Taking it off a menu frees it for
//!   another one.
//! - All items in an order come from the same menu. The first item picks
//!   the menu; an emptied order can pick again.
//! - Tax depends on the kind of item. Food and drink are built in, and any
//!   type implementing [`TaxableItem`](model::TaxableItem) can join them
//!   without touching menus or orders.
//! - A [`GroupOrder`](order::GroupOrder) always tips at least 20%.
//!
//! Constraint violations (adding an item twice, mixing menus, removing
//! something that isn't there) come back as `Err` and leave everything
//! unchanged.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`]: identifiers and the tax capability.
//! - [`item`]: the priced item and its menu back-reference.
//! - [`menu`]: exclusive item ownership and the tax-class rates.
//! - [`order`]: selections, totals, and the group tip rule.
//! - [`telemetry`]: tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```rust
//! use restaurant_orders::item::Item;
//! use restaurant_orders::menu::Menu;
//! use restaurant_orders::order::{GroupOrder, Order};
//! use rust_decimal::Decimal;
//!
//! let menu = Menu::new();
//! let burger = Item::food("Burger", Decimal::new(1000, 2)).unwrap();
//! menu.add_item(&burger).unwrap();
//!
//! let mut order = Order::new();
//! order.add_item(&burger).unwrap();
//! assert_eq!(order.total_with_tax().unwrap(), Decimal::new(11, 0));
//!
//! let mut group = GroupOrder::new();
//! group.add_item(&burger).unwrap();
//! assert_eq!(group.total_with_tax_and_tip(Decimal::new(5, 2)).unwrap(), Decimal::new(132, 1));
//! ```

pub mod item;
pub mod menu;
pub mod model;
pub mod order;
pub mod telemetry;

mod sync;
