//! Pure data structures shared by the menu and order resources.

pub mod item;
pub mod menu;

pub use item::*;
pub use menu::*;
