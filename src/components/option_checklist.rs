//! Option Checklist Component
//!
//! Checkbox group over a fixed (id, label, icon) vocabulary.

use leptos::prelude::*;

/// Checkbox list for a tag vocabulary (allergens, dietary categories)
#[component]
pub fn OptionChecklist(
    /// Heading shown above the checkboxes
    legend: &'static str,
    /// Fixed vocabulary: (id, label, icon)
    options: &'static [(&'static str, &'static str, &'static str)],
    /// Currently selected ids
    #[prop(into)]
    selected: Signal<Vec<String>>,
    /// Called with the option id to toggle
    #[prop(into)]
    on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="option-checklist">
            <label class="option-checklist-legend">{legend}</label>
            <div class="option-checklist-items">
                {options.iter().map(|(id, label, icon)| {
                    let id = *id;
                    let is_checked = move || selected.get().iter().any(|s| s == id);
                    view! {
                        <label class="option-checkbox">
                            <input
                                type="checkbox"
                                prop:checked=is_checked
                                on:change=move |_| on_toggle.run(id.to_string())
                            />
                            <span>{*icon} " " {*label}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
