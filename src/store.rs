//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use crate::models::{Restaurant, User};
use leptos::prelude::*;
use reactive_stores::Store;

/// App-wide state shared across screens
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Restaurants visible to the current user
    pub restaurants: Vec<Restaurant>,
    /// Authenticated user, if any
    pub current_user: Option<User>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_restaurants(store: &AppStore, restaurants: Vec<Restaurant>) {
    *store.restaurants().write() = restaurants;
}

pub fn store_set_user(store: &AppStore, user: Option<User>) {
    *store.current_user().write() = user;
}

/// Look up one restaurant by id
pub fn store_find_restaurant(store: &AppStore, id: &str) -> Option<Restaurant> {
    store
        .restaurants()
        .get()
        .into_iter()
        .find(|r| r.id == id)
}
