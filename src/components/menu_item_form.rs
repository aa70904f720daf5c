//! Menu Item Form Component
//!
//! One editable menu-item draft. All state lives in an [`ItemFormModel`];
//! this component binds it to the inputs, forwards published snapshots to the
//! parent, and runs the AI ingredient parse for this form only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::OptionChecklist;
use crate::form::{FormSeed, ItemFormModel};
use crate::models::{allergen_label, ItemDraft, ALLERGEN_OPTIONS, DIETARY_OPTIONS};

/// Form for one draft menu item
#[component]
pub fn MenuItemForm(
    /// Stable slot key for this form
    form_index: u32,
    /// Parent-supplied initial data (reconciled, never blindly applied)
    #[prop(into)] seed: Signal<FormSeed>,
    /// Publishes `(slot key, snapshot)` upward when content really changed
    #[prop(into)] on_change: Callback<(u32, ItemDraft)>,
    /// Asks the parent to confirm removal of this form
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    let model = RwSignal::new(ItemFormModel::new());

    let publish = move |published: Option<ItemDraft>| {
        if let Some(draft) = published {
            on_change.run((form_index, draft));
        }
    };

    // Reconcile parent seed data into the local draft. The model applies it
    // only on first receipt or when the seed identity changes, so this effect
    // re-running after our own publications is a no-op.
    Effect::new(move |_| {
        let seed = seed.get();
        let mut published = None;
        model.update(|m| published = m.initialize(&seed));
        publish(published);
    });

    let on_name_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let mut published = None;
        model.update(|m| published = m.set_name(&input.value()));
        publish(published);
    };

    let on_description_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
        let mut published = None;
        model.update(|m| published = m.set_description(&input.value()));
        publish(published);
    };

    let on_ingredients_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
        let mut published = None;
        model.update(|m| published = m.set_ingredients(&input.value()));
        publish(published);
    };

    let on_price_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let mut published = None;
        model.update(|m| published = m.set_price(&input.value()));
        publish(published);
    };

    let toggle_allergen = move |id: String| {
        let mut published = None;
        model.update(|m| published = m.toggle_allergen(&id));
        publish(published);
    };

    let toggle_dietary = move |id: String| {
        let mut published = None;
        model.update(|m| published = m.toggle_dietary(&id));
        publish(published);
    };

    let parse_ingredients = move |_| {
        let text = model.with_untracked(|m| m.draft().ingredients.clone());
        if text.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match api::parse_ingredients_with_ai(&text).await {
                Ok(result) => {
                    let mut published = None;
                    model.update(|m| published = m.apply_parse_result(&result));
                    publish(published);
                }
                Err(err) => {
                    web_sys::console::warn_1(
                        &format!("AI ingredient parsing error: {err}").into(),
                    );
                    model.update(|m| m.parse_failed());
                }
            }
        });
    };

    view! {
        <div class="menu-item-form">
            <div class="form-header">
                <h2>"Menu Item #" {form_index + 1}</h2>
                <button type="button" class="remove-btn" on:click=move |_| on_remove.run(())>
                    "❌ Remove"
                </button>
            </div>

            <div class="form-row">
                <label>"Item Name*"</label>
                <input
                    type="text"
                    placeholder="Item Name"
                    prop:value=move || model.with(|m| m.draft().name.clone())
                    on:input=on_name_input
                />
            </div>

            <div class="form-row">
                <label>"Description*"</label>
                <textarea
                    placeholder="Description"
                    prop:value=move || model.with(|m| m.draft().description.clone())
                    on:input=on_description_input
                />
            </div>

            <div class="form-row">
                <label>"Ingredients"</label>
                <textarea
                    placeholder="Paste ingredients from a label or menu (e.g., milk, eggs, wheat)"
                    prop:value=move || model.with(|m| m.draft().ingredients.clone())
                    on:input=on_ingredients_input
                />
                <p class="hint">
                    "SafeEats uses this list to suggest allergens and dietary tags. You can still adjust them manually."
                </p>
            </div>

            <div class="parse-row">
                <button
                    type="button"
                    class="parse-btn"
                    disabled=move || model.with(|m| !m.can_parse())
                    on:click=parse_ingredients
                >
                    "Parse with AI"
                </button>
                <p class="hint">
                    "Scans the ingredients and updates the allergen and dietary checkboxes below."
                </p>
            </div>

            <div class="parse-result">
                {move || model.with(|m| match m.parse_error() {
                    Some(err) => view! {
                        <span class="parse-error">{err.to_string()}</span>
                    }.into_any(),
                    None => {
                        let parsed: String = m
                            .parsed_allergens()
                            .iter()
                            .filter_map(|id| allergen_label(id))
                            .map(|(label, icon)| format!("{icon} {label}"))
                            .collect::<Vec<_>>()
                            .join(" ");
                        if parsed.is_empty() {
                            view! {
                                <span class="muted">
                                    "None detected yet. You can still toggle allergens manually."
                                </span>
                            }.into_any()
                        } else {
                            view! {
                                <span>"Parsed allergens: " <strong>{parsed}</strong></span>
                            }.into_any()
                        }
                    }
                })}
            </div>

            <div class="form-bottom">
                <div class="form-row">
                    <label>"Price*"</label>
                    <input
                        type="text"
                        placeholder="Price"
                        prop:value=move || model.with(|m| m.draft().price_display.clone())
                        on:input=on_price_input
                    />
                </div>

                <OptionChecklist
                    legend="Dietary Options"
                    options=DIETARY_OPTIONS
                    selected=Signal::derive(move || {
                        model.with(|m| m.draft().dietary_categories.clone())
                    })
                    on_toggle=toggle_dietary
                />

                <OptionChecklist
                    legend="Allergens"
                    options=ALLERGEN_OPTIONS
                    selected=Signal::derive(move || model.with(|m| m.draft().allergens.clone()))
                    on_toggle=toggle_allergen
                />
            </div>
        </div>
    }
}
