use serde::Serialize;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_MENU_ID: AtomicU64 = AtomicU64::new(1);

/// Type-safe identifier for Menus.
///
/// Every [`Menu::new`](crate::menu::Menu::new) call gets a fresh id; clones of
/// one handle share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MenuId(u64);

impl MenuId {
    pub(crate) fn next() -> Self {
        Self(NEXT_MENU_ID.fetch_add(1, Ordering::SeqCst))
    }
}

impl Display for MenuId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_{}", self.0)
    }
}
