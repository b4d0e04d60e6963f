pub mod health;
pub mod item;
pub mod put;
pub mod get;
pub mod list;

pub use health::health_handler;
pub use item::{empty_code_handler, item_handler, items_method_not_allowed};
pub use put::create_handler;
pub use list::list_handler;
