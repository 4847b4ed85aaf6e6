//! Error types for menus.

use crate::model::{ItemId, MenuId};
use thiserror::Error;

/// Errors that can occur when changing what a menu lists.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The item already belongs to a menu (this one or another).
    #[error("Item {item} is already assigned to a menu")]
    AlreadyAssigned { item: ItemId },

    /// The item is not listed on this menu.
    #[error("Item {item} is not on {menu}")]
    NotOnMenu { item: ItemId, menu: MenuId },
}
