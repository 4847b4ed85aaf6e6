//! Error types for orders.

use crate::item::ItemError;
use crate::model::{ItemId, MenuId};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The item comes from a different menu than the items already ordered.
    #[error("Item {item} is from {found:?}, but the order is from {expected:?}")]
    MenuMismatch {
        item: ItemId,
        expected: Option<MenuId>,
        found: Option<MenuId>,
    },

    /// The item is not part of the order.
    #[error("Item {0} is not in the order")]
    NotInOrder(ItemId),

    /// A selection could not be priced.
    #[error(transparent)]
    Pricing(#[from] ItemError),
}
