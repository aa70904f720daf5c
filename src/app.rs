//! SafeEats Frontend App
//!
//! Root component: resolves the current path to a screen and provides the
//! app context and store to everything below.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ManageMenuItems, RestaurantPage};
use crate::context::AppContext;
use crate::store::AppState;

/// Screen resolved from the location path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    Restaurant(String),
    ManageMenu(String),
}

/// Map a location pathname to a screen
pub fn route(path: &str) -> Screen {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        ["restaurant", id] => Screen::Restaurant((*id).to_string()),
        ["restaurant", id, "menu"] => Screen::ManageMenu((*id).to_string()),
        _ => Screen::Home,
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));
    provide_context(Store::new(AppState::default()));

    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();

    match route(&path) {
        Screen::ManageMenu(id) => view! { <ManageMenuItems restaurant_id=id /> }.into_any(),
        Screen::Restaurant(id) => view! { <RestaurantPage restaurant_id=id /> }.into_any(),
        Screen::Home => view! {
            <div class="home">
                <h1>"SafeEats"</h1>
                <p>"Sign in and open your restaurant to manage its menu."</p>
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_restaurant_paths() {
        assert_eq!(route("/"), Screen::Home);
        assert_eq!(route(""), Screen::Home);
        assert_eq!(route("/restaurant/r42"), Screen::Restaurant("r42".to_string()));
        assert_eq!(
            route("/restaurant/r42/menu"),
            Screen::ManageMenu("r42".to_string())
        );
        assert_eq!(route("/restaurant/r42/menu/extra"), Screen::Home);
    }
}
