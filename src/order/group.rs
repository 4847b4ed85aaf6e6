use super::{Order, OrderError};
use crate::item::ItemRef;
use crate::model::MenuId;
use rust_decimal::Decimal;
use tracing::debug;

/// An order placed by a large group, which always tips at least
/// [`GroupOrder::MIN_TIP`].
///
/// Everything except the tip rule is the wrapped [`Order`].
#[derive(Debug, Clone, Default)]
pub struct GroupOrder {
    order: Order,
}

impl GroupOrder {
    /// Smallest tip a group order accepts, 20%.
    pub const MIN_TIP: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

    pub fn new() -> Self {
        Self::default()
    }

    /// See [`Order::add_item`].
    pub fn add_item(&mut self, item: &ItemRef) -> Result<(), OrderError> {
        self.order.add_item(item)
    }

    /// See [`Order::remove_item`].
    pub fn remove_item(&mut self, item: &ItemRef) -> Result<(), OrderError> {
        self.order.remove_item(item)
    }

    pub fn selections(&self) -> &[ItemRef] {
        self.order.selections()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn menu_id(&self) -> Option<MenuId> {
        self.order.menu_id()
    }

    pub fn total_with_tax(&self) -> Result<Decimal, OrderError> {
        self.order.total_with_tax()
    }

    /// Like [`Order::total_with_tax_and_tip`], but a tip below
    /// [`GroupOrder::MIN_TIP`] is raised to it.
    pub fn total_with_tax_and_tip(&self, tip: Decimal) -> Result<Decimal, OrderError> {
        let effective = tip.max(Self::MIN_TIP);
        if effective != tip {
            debug!(requested = %tip, applied = %effective, "Group tip raised to minimum");
        }
        self.order.total_with_tax_and_tip(effective)
    }

    pub fn as_order(&self) -> &Order {
        &self.order
    }

    pub fn into_order(self) -> Order {
        self.order
    }
}

impl From<Order> for GroupOrder {
    fn from(order: Order) -> Self {
        Self { order }
    }
}
