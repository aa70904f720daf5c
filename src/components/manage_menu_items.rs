//! Manage Menu Items Screen
//!
//! Owns the multi-form aggregator: auth-gated load, the keyed collection of
//! item forms, the photo-ingest seeding flow, confirmation-gated removal, and
//! the parallel "add all items" submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::aggregator::{submit_candidates, MultiFormAggregator};
use crate::api;
use crate::components::{ConfirmDialog, MenuItemForm};
use crate::context::AppContext;
use crate::form::FormSeed;
use crate::models::ItemDraft;
use crate::session::{
    gate_access, restaurant_path, store_notice, BrowserStorage, SessionGate,
    LOAD_ERROR_MESSAGE,
};
use crate::store::{store_set_restaurants, store_set_user, use_app_store};

/// Bulk menu-item editing screen for one restaurant
#[component]
pub fn ManageMenuItems(restaurant_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let restaurant_id = StoredValue::new(restaurant_id);

    let agg = RwSignal::new(MultiFormAggregator::new());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(None::<String>);
    let (ingesting, set_ingesting) = signal(false);
    let (ingested_count, set_ingested_count) = signal(0usize);

    // Auth gate, then restaurant fetch. Re-runs on reload() after a load
    // failure.
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        set_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            let session = api::get_current_user().await;
            if let Err(err) = &session {
                web_sys::console::warn_1(
                    &format!("Authentication or fetch error: {err}").into(),
                );
            }
            match gate_access(session, &restaurant_id.get_value()) {
                SessionGate::Redirect(path) => {
                    ctx.navigate(&path);
                }
                SessionGate::LoadError(message) => {
                    set_load_error.set(Some(message));
                    set_loading.set(false);
                }
                SessionGate::Granted(user) => {
                    store_set_user(&store, user);
                    match api::get_restaurants().await {
                        Ok(restaurants) => {
                            store_set_restaurants(&store, restaurants);
                        }
                        Err(err) => {
                            web_sys::console::warn_1(
                                &format!("Failed to fetch restaurants: {err}").into(),
                            );
                            set_load_error.set(Some(LOAD_ERROR_MESSAGE.to_string()));
                        }
                    }
                    set_loading.set(false);
                }
            }
        });
    });

    let back_to_restaurant = move |_| {
        ctx.navigate(&restaurant_path(&restaurant_id.get_value()));
    };

    let add_form = move |_| {
        agg.update(|a| {
            a.add_slot();
        });
    };

    // Seed draft forms from an uploaded menu photo. The input value is reset
    // afterwards so the same file can be re-uploaded.
    let on_ingest_file = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target
            .dyn_ref::<web_sys::HtmlInputElement>()
            .unwrap()
            .clone();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        agg.update(|a| a.clear_error());
        set_ingesting.set(true);
        spawn_local(async move {
            match api::ingest_menu_image(&file).await {
                Ok(result) => {
                    set_ingested_count.set(result.items.len());
                    agg.update(|a| {
                        a.seed_from_bulk_ingest(&result);
                    });
                }
                Err(err) => {
                    agg.update(|a| a.set_error(err));
                }
            }
            set_ingesting.set(false);
            input.set_value("");
        });
    };

    // Fan out one creation call per valid draft, all in flight at once. On
    // full success the one-shot notice is persisted and control goes back to
    // the restaurant page; on any failure the screen stays editable.
    let add_all_items = move |_| {
        let Some(candidates) = agg.try_update(|a| a.begin_submit()).flatten() else {
            return;
        };
        let rid = restaurant_id.get_value();
        spawn_local(async move {
            web_sys::console::log_1(
                &format!("Adding {} menu items", candidates.len()).into(),
            );
            let rid_for_calls = rid.clone();
            let outcome = submit_candidates(candidates, move |draft: ItemDraft| {
                let rid = rid_for_calls.clone();
                async move { api::add_menu_item(&rid, &draft.to_payload()).await }
            })
            .await;

            match outcome {
                Ok(count) => {
                    agg.update(|a| a.submit_succeeded());
                    store_notice(&mut BrowserStorage, count);
                    ctx.navigate(&restaurant_path(&rid));
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("Failed to add menu items: {err}").into(),
                    );
                    agg.update(|a| a.submit_failed());
                }
            }
        });
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="loading-spinner"></div> }
        >
            <div class="manage-menu">
                <div class="screen-header">
                    <button class="back-btn" on:click=back_to_restaurant>
                        "← Back to Restaurant"
                    </button>
                    <h1>"Add Menu Items"</h1>
                </div>

                {move || load_error.get().map(|err| view! {
                    <div class="error-banner">
                        {err}
                        <button class="retry-btn" on:click=move |_| ctx.reload()>
                            "Retry"
                        </button>
                    </div>
                })}

                {move || agg.with(|a| a.error().map(str::to_string)).map(|err| view! {
                    <div class="error-banner">{err}</div>
                })}

                <div class="ingest-section">
                    <label>"Import menu from photo (PNG/JPEG)"</label>
                    <input
                        type="file"
                        accept="image/png, image/jpeg, application/pdf"
                        on:change=on_ingest_file
                    />
                    <Show when=move || ingesting.get()>
                        <div class="hint">"Extracting items..."</div>
                    </Show>
                    <Show when=move || { ingested_count.get() > 0 }>
                        <div class="hint">
                            "Imported " {move || ingested_count.get()}
                            " items. Review and edit below, then click \"Add All Items\"."
                        </div>
                    </Show>
                </div>

                <For
                    each=move || agg.with(|a| a.slot_keys().to_vec())
                    key=|key| *key
                    children=move |key: u32| {
                        let seed = Memo::new(move |_| {
                            agg.with(|a| {
                                a.draft(key).map(FormSeed::from).unwrap_or_default()
                            })
                        });
                        view! {
                            <MenuItemForm
                                form_index=key
                                seed=seed
                                on_change=move |(slot, draft): (u32, ItemDraft)| {
                                    agg.update(|a| a.on_child_change(slot, draft));
                                }
                                on_remove=move |_| agg.update(|a| a.request_remove(key))
                            />
                        }
                    }
                />

                <div class="screen-actions">
                    <button class="add-form-btn" title="Add another item" on:click=add_form>
                        "+"
                    </button>
                    <button
                        class="submit-all-btn"
                        disabled=move || agg.with(|a| a.busy())
                        on:click=add_all_items
                    >
                        {move || if agg.with(|a| a.busy()) {
                            "Adding Items..."
                        } else {
                            "Add All Items"
                        }}
                    </button>
                    <button class="cancel-btn" on:click=back_to_restaurant>
                        "Cancel"
                    </button>
                </div>

                {move || agg.with(|a| a.pending_removal()).map(|_| view! {
                    <ConfirmDialog
                        title="Confirm Deletion"
                        message="Are you sure you want to delete this menu item? This action cannot be undone."
                        confirm_label="Yes, Delete"
                        on_confirm=move |_| agg.update(|a| a.confirm_remove())
                        on_cancel=move |_| agg.update(|a| a.cancel_remove())
                    />
                })}
            </div>
        </Show>
    }
}
