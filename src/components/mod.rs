//! UI Components
//!
//! Reusable Leptos components.

mod confirm_dialog;
mod manage_menu_items;
mod menu_item_form;
mod option_checklist;
mod restaurant_page;

pub use confirm_dialog::ConfirmDialog;
pub use manage_menu_items::ManageMenuItems;
pub use menu_item_form::MenuItemForm;
pub use option_checklist::OptionChecklist;
pub use restaurant_page::RestaurantPage;
