pub mod enums;
pub mod item;
pub mod views;

pub use enums::UiMode;
pub use item::{seed_items, Item};
pub use views::{checkbox, remaining_label};
