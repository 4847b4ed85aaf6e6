//! Error types for items.

use crate::model::ItemId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while building or pricing an item.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    /// Prices must be zero or positive.
    #[error("Negative price: {0}")]
    NegativePrice(Decimal),

    /// The item has no menu yet, so it has no tax rate.
    #[error("Item {0} is not assigned to a menu")]
    Unassigned(ItemId),
}
