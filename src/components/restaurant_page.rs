//! Restaurant Page Component
//!
//! Restaurant overview screen. Consumes the one-shot "items added" notice
//! left behind by a successful bulk submit and shows it exactly once.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::session::{
    menu_path, take_notice, BrowserStorage, ItemsAddedNotice, LOAD_ERROR_MESSAGE,
};
use crate::store::{store_find_restaurant, store_set_restaurants, use_app_store};

/// Restaurant overview with menu-management entry point
#[component]
pub fn RestaurantPage(restaurant_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let restaurant_id = StoredValue::new(restaurant_id);

    let (notice, set_notice) = signal(None::<ItemsAddedNotice>);
    let (load_error, set_load_error) = signal(None::<String>);

    // Read-and-clear in one step; a remount will not see the notice again
    Effect::new(move |_| {
        set_notice.set(take_notice(&mut BrowserStorage));
    });

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            match api::get_restaurants().await {
                Ok(restaurants) => store_set_restaurants(&store, restaurants),
                Err(err) => {
                    web_sys::console::warn_1(&format!("Restaurant load error: {err}").into());
                    set_load_error.set(Some(LOAD_ERROR_MESSAGE.to_string()));
                }
            }
        });
    });

    let manage_menu = move |_| {
        ctx.navigate(&menu_path(&restaurant_id.get_value()));
    };

    view! {
        <div class="restaurant-page">
            {move || notice.get().map(|n| view! {
                <div class="success-banner">
                    "Successfully added " {n.count} " menu items!"
                </div>
            })}

            {move || load_error.get().map(|err| view! {
                <div class="error-banner">{err}</div>
            })}

            {move || {
                let restaurant = store_find_restaurant(&store, &restaurant_id.get_value());
                match restaurant {
                    Some(r) => view! {
                        <div class="restaurant-details">
                            <h1>{r.name.clone()}</h1>
                            {r.description.clone().map(|d| view! { <p>{d}</p> })}
                            {r.address.clone().map(|a| view! { <p class="muted">{a}</p> })}
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="restaurant-details">
                            <h1>"Restaurant"</h1>
                        </div>
                    }.into_any(),
                }
            }}

            <button class="manage-menu-btn" on:click=manage_menu>
                "Add Menu Items"
            </button>
        </div>
    }
}
